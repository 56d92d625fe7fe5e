/// 估计器错误类型定义

use thiserror::Error;

/// 估计器可能产生的错误
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EstimatorError {
    /// 距离必须为正且有限（log10 在 0 处发散）
    #[error("无效距离 {0}：距离必须为正且有限")]
    InvalidDistance(f64),

    /// 房间边界非法（min > max 或含非有限值）
    #[error("无效房间边界 [{min_x}, {max_x}] x [{min_y}, {max_y}]")]
    InvalidRoomBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    /// 锚点坐标含非有限值
    #[error("无效锚点坐标 ({x}, {y})")]
    InvalidAnchor { x: f64, y: f64 },

    /// 路径损耗模型参数非法
    #[error("无效路径损耗参数：A = {rssi_at_one_meter} dBm, n = {path_loss_exponent}")]
    InvalidPathLoss {
        rssi_at_one_meter: f64,
        path_loss_exponent: f64,
    },

    /// 求解器调参非法（步长、容差等）
    #[error("无效求解器参数：{0}")]
    InvalidSolverTuning(String),

    /// 配置 JSON 解析失败
    #[error("配置解析失败：{0}")]
    ConfigParse(String),
}
