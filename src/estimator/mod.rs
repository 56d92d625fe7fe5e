/// 在位估计模块
///
/// 该模块提供基于双锚点 RSSI 的房间在位估计实现，支持：
/// - RSSI 转距离计算（对数路径损耗模型）
/// - 残差最小化的位置求解（Nelder-Mead / 两级网格搜索）
/// - 带浮点容差的房间边界判定
/// - 可配置的锚点、边界与求解器参数

pub mod config;
pub mod errors;
pub mod geometry;
pub mod objective;
pub mod path_loss;
pub mod results;
pub mod room_estimator;
pub mod solver;

pub use config::*;
pub use errors::*;
pub use geometry::*;
pub use objective::*;
pub use path_loss::*;
pub use results::*;
pub use room_estimator::*;
pub use solver::*;
