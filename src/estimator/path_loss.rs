/// RSSI 到距离转换模型
///
/// 对数路径损耗模型，RSSI 与距离互为反函数：
///
/// distance = 10 ^ ((A - rssi) / (10 * n))
/// rssi     = A - 10 * n * log10(distance)
///
/// 其中 A 为 1 米处参考功率（dBm），n 为路径损耗指数

use crate::estimator::errors::EstimatorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 对数路径损耗模型参数
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathLossModel {
    /// 1 米处参考功率 A（dBm）
    pub rssi_at_one_meter: f64,
    /// 路径损耗指数 n（空旷环境约 2.0，遮挡越多越大）
    pub path_loss_exponent: f64,
}

impl PathLossModel {
    /// 创建新的路径损耗模型
    pub fn new(rssi_at_one_meter: f64, path_loss_exponent: f64) -> Self {
        PathLossModel {
            rssi_at_one_meter,
            path_loss_exponent,
        }
    }

    /// 根据 RSSI 计算距离（米）
    ///
    /// 任意有限 RSSI 都映射到一个正距离；不设上限，
    /// 信号很弱时估计距离可远超房间对角线
    pub fn rssi_to_distance(&self, rssi: f64) -> f64 {
        let exponent = (self.rssi_at_one_meter - rssi) / (10.0 * self.path_loss_exponent);
        10_f64.powf(exponent)
    }

    /// 根据距离（米）计算 RSSI
    ///
    /// 距离必须为正且有限，否则 log10 无定义，返回错误
    /// 而不是让 NaN / Inf 渗入后续计算
    pub fn distance_to_rssi(&self, distance: f64) -> Result<f64, EstimatorError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(EstimatorError::InvalidDistance(distance));
        }
        Ok(self.rssi_at_one_meter - 10.0 * self.path_loss_exponent * distance.log10())
    }

    /// 验证模型参数的合理性
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.rssi_at_one_meter.is_finite()
            || !self.path_loss_exponent.is_finite()
            || self.path_loss_exponent <= 0.0
        {
            return Err(EstimatorError::InvalidPathLoss {
                rssi_at_one_meter: self.rssi_at_one_meter,
                path_loss_exponent: self.path_loss_exponent,
            });
        }
        Ok(())
    }
}

impl Default for PathLossModel {
    fn default() -> Self {
        // 常见 BLE 标定：1 米处 -59 dBm，自由空间指数 2.0
        PathLossModel::new(-59.0, 2.0)
    }
}

impl fmt::Display for PathLossModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "路径损耗模型 A = {:.2} dBm, n = {:.2}",
            self.rssi_at_one_meter, self.path_loss_exponent
        )
    }
}
