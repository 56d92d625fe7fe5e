/// 几何基础类型
///
/// 提供 2D 点与矩形房间边界的定义，坐标单位约定为米

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边界判定的浮点容差（米）
///
/// 点恰好落在边界上时，浮点舍入可能把它推到边界外一个
/// 极小量；判定前把每条边界向外放宽该容差予以吸收
pub const BOUNDS_EPSILON: f64 = 1e-9;

/// 2D 平面点
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X 坐标（米）
    pub x: f64,
    /// Y 坐标（米）
    pub y: f64,
}

impl Point {
    /// 创建新的点
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// 与另一点的欧几里得距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// 坐标是否全部为有限值
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// 矩形房间边界
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X 最小值（米）
    pub min_x: f64,
    /// X 最大值（米）
    pub max_x: f64,
    /// Y 最小值（米）
    pub min_y: f64,
    /// Y 最大值（米）
    pub max_y: f64,
}

impl Rect {
    /// 创建新的矩形边界
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Rect {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// 矩形几何中心
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// 向四个方向各扩展 margin 后的矩形
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect::new(
            self.min_x - margin,
            self.max_x + margin,
            self.min_y - margin,
            self.max_y + margin,
        )
    }

    /// 点是否在矩形内（闭区间，含 BOUNDS_EPSILON 容差）
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x - BOUNDS_EPSILON
            && point.x <= self.max_x + BOUNDS_EPSILON
            && point.y >= self.min_y - BOUNDS_EPSILON
            && point.y <= self.max_y + BOUNDS_EPSILON
    }

    /// 边界是否合法（各轴 min <= max 且全部有限）
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] x [{:.2}, {:.2}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
    }

    #[test]
    fn test_rect_center() {
        let room = Rect::new(0.0, 10.0, 0.0, 8.0);
        let center = room.center();
        assert_eq!(center, Point::new(5.0, 4.0));
    }

    #[test]
    fn test_rect_contains_boundary() {
        let room = Rect::new(0.0, 10.0, 0.0, 10.0);

        // 正好在边界上
        assert!(room.contains(Point::new(10.0, 5.0)));
        // 超出边界一个远小于容差的量
        assert!(room.contains(Point::new(10.0 + 1e-10, 5.0)));
        // 明显超出边界
        assert!(!room.contains(Point::new(10.01, 5.0)));
    }

    #[test]
    fn test_rect_expanded() {
        let room = Rect::new(0.0, 10.0, 0.0, 10.0);
        let search = room.expanded(5.0);
        assert_eq!(search, Rect::new(-5.0, 15.0, -5.0, 15.0));
    }

    #[test]
    fn test_rect_validity() {
        assert!(Rect::new(0.0, 10.0, 0.0, 10.0).is_valid());
        assert!(!Rect::new(10.0, 0.0, 0.0, 10.0).is_valid());
        assert!(!Rect::new(0.0, f64::NAN, 0.0, 10.0).is_valid());
    }
}
