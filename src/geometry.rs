use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned box used for world extents, card sizes and hit testing.
///
/// Degenerate (zero-area) boxes are not guarded; callers construct sane
/// extents up front.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Symmetrically grows the shorter axis until width/height equals the
    /// given ratio. Used to letterbox world extents to a window.
    pub fn expand_to_aspect_ratio(&mut self, aspect_ratio: f64) {
        let current = self.aspect_ratio();

        let mut delta = Vec2::ZERO;
        if current < aspect_ratio {
            delta.x = (self.height() * aspect_ratio - self.width()) / 2.0;
        } else if current > aspect_ratio {
            delta.y = (self.width() / aspect_ratio - self.height()) / 2.0;
        }

        self.min = self.min - delta;
        self.max = self.max + delta;

        debug_assert!((self.aspect_ratio() - aspect_ratio).abs() < 1e-5);
    }

    pub fn point_to_uvs(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - self.min.x) / self.width(),
            (point.y - self.min.y) / self.height(),
        )
    }

    pub fn point_from_uvs(&self, uvs: Vec2) -> Vec2 {
        Vec2::new(
            self.min.x + uvs.x * self.width(),
            self.min.y + uvs.y * self.height(),
        )
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
    }

    pub fn translated(&self, offset: Vec2) -> Bounds {
        Bounds::new(self.min + offset, self.max + offset)
    }
}
