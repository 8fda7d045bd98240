/// Axis-aligned rectangle in compositor (logical pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Empty or inverted rectangles are invalid.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(Rect::new(0, 0, 200, 200).is_valid());
        assert!(Rect::new(-10, -10, 1, 1).is_valid());
        assert!(!Rect::new(0, 0, 0, 20).is_valid());
        assert!(!Rect::new(0, 0, 20, -1).is_valid());
        assert!(!Rect::default().is_valid());
    }

    #[test]
    fn test_position_offset() {
        let icon = Rect::new(10, 500, 20, 20);
        let window = Rect::new(100, 50, 200, 200);
        assert_eq!(icon.position() - window.position(), Vec2::new(-90.0, 450.0));
    }
}
