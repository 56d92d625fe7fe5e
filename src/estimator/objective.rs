/// 残差（目标）函数
///
/// 候选位置到两个锚点的几何距离与两个距离估计之差的平方和，
/// 是位置求解器要最小化的量。
///
/// 注意：双锚点 2D 定位本质上欠定。残差为零的点集是两圆的
/// 交集，一般含 0、1 或 2 个点，全局最小值不保证唯一。最终
/// 收敛到哪一个由搜索策略的确定性行为决定（局部优化取初始
/// 猜测所在的吸引域，网格搜索取遍历顺序上先遇到的最小值），
/// 这是问题固有性质而非缺陷。

use crate::estimator::geometry::Point;

/// 计算候选位置的残差
///
/// residual(p) = (‖p - anchor1‖ - r1)^2 + (‖p - anchor2‖ - r2)^2
pub fn residual(guess: Point, anchors: &[Point; 2], r1: f64, r2: f64) -> f64 {
    let e1 = guess.distance_to(&anchors[0]) - r1;
    let e2 = guess.distance_to(&anchors[1]) - r2;
    e1 * e1 + e2 * e2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_residual_at_true_position() {
        let anchors = [Point::new(0.0, 5.0), Point::new(8.0, 8.0)];
        let p = Point::new(3.0, 4.0);
        let r1 = p.distance_to(&anchors[0]);
        let r2 = p.distance_to(&anchors[1]);
        // 用真实距离作为估计时残差应为零
        assert!(residual(p, &anchors, r1, r2).abs() < 1e-12);
    }

    #[test]
    fn test_residual_non_negative() {
        let anchors = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        for i in 0..20 {
            let p = Point::new(i as f64 * 0.7 - 3.0, i as f64 * 0.3);
            assert!(residual(p, &anchors, 2.0, 3.0) >= 0.0);
        }
    }
}
