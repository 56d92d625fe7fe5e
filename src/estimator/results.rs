/// 估计结果数据结构

use crate::estimator::geometry::Point;
use chrono::{DateTime, Utc};
use std::fmt;

/// 单次在位估计的完整结果
#[derive(Clone, Debug)]
pub struct EstimateResult {
    /// 残差最小的拟合位置；求解失败时为 None
    pub best_fit: Option<Point>,
    /// 拟合位置处的残差值；求解失败时为 None
    pub residual: Option<f64>,
    /// 标签是否被判定在房间内（求解失败时按回退策略为 false）
    pub in_room: bool,
    /// 求解器是否正常收敛
    pub converged: bool,
    /// 使用的求解策略名称
    pub method: String,
    /// 估计产生的时间戳
    pub timestamp: DateTime<Utc>,
}

impl EstimateResult {
    /// 创建收敛结果
    pub fn converged(best_fit: Point, residual: f64, in_room: bool, method: &str) -> Self {
        EstimateResult {
            best_fit: Some(best_fit),
            residual: Some(residual),
            in_room,
            converged: true,
            method: method.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// 创建求解失败的回退结果（固定判定为不在房间内）
    pub fn diverged(method: &str) -> Self {
        EstimateResult {
            best_fit: None,
            residual: None,
            in_room: false,
            converged: false,
            method: method.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for EstimateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_fit {
            Some(p) => write!(
                f,
                "{} [{}] 在房间内: {}",
                p,
                self.method,
                if self.in_room { "是" } else { "否" }
            ),
            None => write!(f, "求解失败 [{}] 在房间内: 否", self.method),
        }
    }
}
