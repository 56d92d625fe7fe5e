/// 室内在位估计库
///
/// 通过两个固定锚点的 RSSI 读数，估计无线标签是否位于
/// 已知矩形房间内。支持的功能：
/// - 对数路径损耗模型的 RSSI / 距离互转
/// - 两种可互换的位置搜索策略（Nelder-Mead 局部优化、两级网格搜索）
/// - 可配置的锚点坐标、房间边界与模型参数
/// - RSSI 滑动窗口平滑

pub mod estimator;
pub mod smoothing;

pub use estimator::{
    EstimateResult, EstimatorConfig, EstimatorError, PathLossModel, Point, Rect, RoomEstimator,
    SolveOutcome, SolverStrategy,
};
pub use smoothing::RollingAverage;
