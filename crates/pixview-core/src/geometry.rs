use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D vector in viewport pixels. Used for the image position (offset of its
/// top-left corner from the viewport's top-left corner) and for motion deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

fn is_valid_extent(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Natural (unscaled) pixel dimensions of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    /// Returns `None` for zero, negative or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        is_valid_extent(width, height).then_some(Self { width, height })
    }

    pub fn from_pixels(width: u32, height: u32) -> Option<Self> {
        Self::new(width as f32, height as f32)
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn shorter_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Size of the image after uniform scaling.
    pub fn scaled(&self, scale: f32) -> Vec2 {
        Vec2::new(self.width * scale, self.height * scale)
    }
}

/// Current size of the container the image is displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// Returns `None` for zero, negative or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        is_valid_extent(width, height).then_some(Self { width, height })
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Where the renderer should draw the image, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Geometry is not known yet; draw at intrinsic size, unpositioned.
    Auto,
    Fixed {
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    },
}

impl Placement {
    pub fn is_auto(&self) -> bool {
        matches!(self, Placement::Auto)
    }

    /// Visual center of a fixed placement.
    pub fn center(&self) -> Option<Vec2> {
        match *self {
            Placement::Auto => None,
            Placement::Fixed {
                left,
                top,
                width,
                height,
            } => Some(Vec2::new(left + width / 2.0, top + height / 2.0)),
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Auto => write!(f, "auto"),
            Placement::Fixed {
                left,
                top,
                width,
                height,
            } => write!(f, "{width:.1}x{height:.1} at ({left:.1}, {top:.1})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(ImageSize::new(0.0, 10.0).is_none());
        assert!(ImageSize::new(10.0, -1.0).is_none());
        assert!(ImageSize::new(f32::NAN, 10.0).is_none());
        assert!(ViewportRect::new(f32::INFINITY, 10.0).is_none());
        assert!(ImageSize::from_pixels(0, 0).is_none());
    }

    #[test]
    fn test_shorter_side_and_aspect() {
        let size = ImageSize::new(400.0, 100.0).unwrap();
        assert_eq!(size.shorter_side(), 100.0);
        assert_eq!(size.aspect(), 4.0);
    }

    #[test]
    fn test_placement_center() {
        let p = Placement::Fixed {
            left: -100.0,
            top: -50.0,
            width: 400.0,
            height: 200.0,
        };
        assert_eq!(p.center(), Some(Vec2::new(100.0, 50.0)));
        assert_eq!(Placement::Auto.center(), None);
    }
}
