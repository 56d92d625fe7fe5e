/// 房间在位估计器（门面）
///
/// 组合距离模型、残差函数与位置求解器：
/// RSSI 对 → 距离估计 → 最优拟合位置 → 是否在房间内。
/// 每次调用都是无状态的一次性估计，调用之间不共享可变状态，
/// 多线程下只需只读共享同一配置即可安全并发

use crate::estimator::config::EstimatorConfig;
use crate::estimator::errors::EstimatorError;
use crate::estimator::geometry::Point;
use crate::estimator::objective;
use crate::estimator::results::EstimateResult;
use crate::estimator::solver::SolveOutcome;

/// 双锚点房间在位估计器
#[derive(Clone, Debug)]
pub struct RoomEstimator {
    config: EstimatorConfig,
}

impl RoomEstimator {
    /// 创建估计器，配置在构造期校验
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(RoomEstimator { config })
    }

    /// 当前配置
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// RSSI（dBm）转距离（米）
    pub fn rssi_to_distance(&self, rssi: f64) -> f64 {
        self.config.path_loss.rssi_to_distance(rssi)
    }

    /// 距离（米）转 RSSI（dBm），距离必须为正且有限
    pub fn distance_to_rssi(&self, distance: f64) -> Result<f64, EstimatorError> {
        self.config.path_loss.distance_to_rssi(distance)
    }

    /// 候选位置相对两个距离估计的残差
    pub fn residual(&self, guess: Point, r1: f64, r2: f64) -> f64 {
        objective::residual(guess, &self.config.anchors, r1, r2)
    }

    /// 点是否在房间内（闭区间，含浮点容差）
    pub fn is_point_in_room(&self, point: Point) -> bool {
        self.config.room.contains(point)
    }

    /// 完整估计，返回带拟合位置与元数据的结果
    pub fn estimate(&self, rssi1: f64, rssi2: f64) -> EstimateResult {
        let r1 = self.rssi_to_distance(rssi1);
        let r2 = self.rssi_to_distance(rssi2);
        let method = self.config.strategy.name();

        match self
            .config
            .strategy
            .solve(&self.config.room, &self.config.anchors, r1, r2)
        {
            SolveOutcome::Converged(best_fit) => EstimateResult::converged(
                best_fit,
                self.residual(best_fit, r1, r2),
                self.is_point_in_room(best_fit),
                method,
            ),
            SolveOutcome::Diverged => {
                // 回退策略：求解失败一律判定为不在房间内
                log::warn!(
                    "位置求解未收敛，按不在房间内处理 (rssi1 = {}, rssi2 = {})",
                    rssi1,
                    rssi2
                );
                EstimateResult::diverged(method)
            }
        }
    }

    /// 主入口：两路 RSSI 读数是否表明标签在房间内
    pub fn is_in_room(&self, rssi1: f64, rssi2: f64) -> bool {
        self.estimate(rssi1, rssi2).in_room
    }
}
