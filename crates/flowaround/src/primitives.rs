use glam::Vec2;

/// Measured extent of one obstacle element (an inset image, a caption block, ...)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square obstacle, the common case for thumbnails
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<[f32; 2]> for Size {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            width: arr[0],
            height: arr[1],
        }
    }
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Vec2::new(size.width, size.height)
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Size) -> Self {
        Self {
            min,
            max: min + Vec2::from(size),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_min_size() {
        let rect = Rect::from_min_size(Vec2::new(10.0, 0.0), Size::new(150.0, 80.0));
        assert_eq!(rect.max, Vec2::new(160.0, 80.0));
        assert_eq!(rect.width(), 150.0);
        assert_eq!(rect.height(), 80.0);
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::square(20.0).is_valid());
        assert!(Size::default().is_valid());
        assert!(!Size::new(-1.0, 20.0).is_valid());
        assert!(!Size::new(10.0, f32::NAN).is_valid());
        assert!(!Size::new(f32::INFINITY, 10.0).is_valid());
    }
}
