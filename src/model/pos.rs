use std::{
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Simple (x, y) coordinate / vector
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Pos {
    /// Position on the x-axis.
    pub x: f32,
    /// Position on the y-axis.
    pub y: f32,
}

impl Pos {
    /// Create a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return the position's length squared.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Return the position's length.
    pub fn length(self) -> f32 {
        f64::from(self.x * self.x + self.y * self.y).sqrt() as f32
    }

    /// Return the dot product.
    pub fn dot(self, other: Self) -> f32 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Return the distance to another position.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Normalize the coordinates with respect to the vector's length.
    pub fn normalize(self) -> Self {
        let scale = self.length().recip();

        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Pos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Pos {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Pos {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Pos {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Pos {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;

    #[test]
    fn length_and_distance() {
        let a = Pos::new(3.0, 4.0);

        assert!((a.length() - 5.0).abs() < f32::EPSILON);
        assert!((a.length_squared() - 25.0).abs() < f32::EPSILON);
        assert!((a.distance(Pos::default()) - 5.0).abs() < f32::EPSILON);

        let n = a.normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn operators() {
        let mut a = Pos::new(1.0, 2.0);
        a += Pos::new(1.0, 1.0);
        assert_eq!(a, Pos::new(2.0, 3.0));

        a -= Pos::new(2.0, 0.0);
        assert_eq!(a, Pos::new(0.0, 3.0));

        assert_eq!(-a, Pos::new(0.0, -3.0));
        assert_eq!(a * 2.0, Pos::new(0.0, 6.0));
        assert_eq!(a / 3.0, Pos::new(0.0, 1.0));
        assert_eq!(format!("{a}"), "(0, 3)");
    }
}
