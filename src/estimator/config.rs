/// 估计器配置
///
/// 锚点坐标、房间边界、路径损耗参数与求解策略统一为一个
/// 显式配置对象，在估计器构造期一次性校验，而不是编译进
/// 代码的常量。历史上两套并行部署各自硬编码了一组发散的
/// 常量，这里以两个示例预设保留，均不代表权威生产配置

use crate::estimator::errors::EstimatorError;
use crate::estimator::geometry::{Point, Rect};
use crate::estimator::path_loss::PathLossModel;
use crate::estimator::solver::SolverStrategy;
use serde::{Deserialize, Serialize};

/// 在位估计器的完整配置
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// 两个固定锚点的坐标（米）
    pub anchors: [Point; 2],
    /// 房间矩形边界（米）
    pub room: Rect,
    /// 路径损耗模型参数
    pub path_loss: PathLossModel,
    /// 求解策略及其调参
    pub strategy: SolverStrategy,
}

impl EstimatorConfig {
    /// 创建新的配置
    pub fn new(
        anchors: [Point; 2],
        room: Rect,
        path_loss: PathLossModel,
        strategy: SolverStrategy,
    ) -> Self {
        EstimatorConfig {
            anchors,
            room,
            path_loss,
            strategy,
        }
    }

    /// 示例预设一：Nelder-Mead 局部优化部署
    pub fn preset_nelder_mead() -> Self {
        EstimatorConfig::new(
            [Point::new(0.0, 5.0), Point::new(8.0, 8.0)],
            Rect::new(0.0, 10.0, 0.0, 10.0),
            PathLossModel::new(-59.0, 2.0),
            SolverStrategy::nelder_mead(),
        )
    }

    /// 示例预设二：网格搜索部署
    pub fn preset_grid_search() -> Self {
        EstimatorConfig::new(
            [Point::new(1.0, 1.0), Point::new(9.0, 6.0)],
            Rect::new(0.0, 10.0, 0.0, 8.0),
            PathLossModel::new(-65.0, 2.5),
            SolverStrategy::grid_search(),
        )
    }

    /// 从 JSON 字符串加载配置
    pub fn from_json(json: &str) -> Result<Self, EstimatorError> {
        serde_json::from_str(json).map_err(|e| EstimatorError::ConfigParse(e.to_string()))
    }

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> Result<String, EstimatorError> {
        serde_json::to_string_pretty(self).map_err(|e| EstimatorError::ConfigParse(e.to_string()))
    }

    /// 配置合法性校验
    ///
    /// 非法配置在构造期拒绝，而不是在搜索中途才暴露
    pub fn validate(&self) -> Result<(), EstimatorError> {
        for anchor in &self.anchors {
            if !anchor.is_finite() {
                return Err(EstimatorError::InvalidAnchor {
                    x: anchor.x,
                    y: anchor.y,
                });
            }
        }

        if !self.room.is_valid() {
            return Err(EstimatorError::InvalidRoomBounds {
                min_x: self.room.min_x,
                max_x: self.room.max_x,
                min_y: self.room.min_y,
                max_y: self.room.max_y,
            });
        }

        self.path_loss.validate()?;

        match self.strategy {
            SolverStrategy::NelderMead {
                xtol_rel,
                max_iterations,
            } => {
                if !xtol_rel.is_finite() || xtol_rel <= 0.0 {
                    return Err(EstimatorError::InvalidSolverTuning(format!(
                        "xtol_rel = {} 必须为正有限值",
                        xtol_rel
                    )));
                }
                if max_iterations == 0 {
                    return Err(EstimatorError::InvalidSolverTuning(
                        "max_iterations 必须大于 0".to_string(),
                    ));
                }
            }
            SolverStrategy::GridSearch {
                margin,
                coarse_step,
                fine_range,
                fine_step,
            } => {
                if !margin.is_finite() || margin < 0.0 {
                    return Err(EstimatorError::InvalidSolverTuning(format!(
                        "margin = {} 必须为非负有限值",
                        margin
                    )));
                }
                for (name, value) in [
                    ("coarse_step", coarse_step),
                    ("fine_range", fine_range),
                    ("fine_step", fine_step),
                ] {
                    if !value.is_finite() || value <= 0.0 {
                        return Err(EstimatorError::InvalidSolverTuning(format!(
                            "{} = {} 必须为正有限值",
                            name, value
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::preset_nelder_mead()
    }
}
