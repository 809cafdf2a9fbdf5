//! 2D affine transform matrix as reported by computed styles
//!
//! A CSS `matrix(a, b, c, d, e, f)` maps a point `(x, y)` to
//! `(a·x + c·y + e, b·x + d·y + f)`.

use serde::{Deserialize, Serialize};

/// Six-component 2D affine matrix
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2d {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

/// Matrix broken down into individual transform components
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    /// Rotation in degrees
    pub angle: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Horizontal skew in degrees
    pub skew_x: f64,
    /// Always 0, a 2D decomposition does not recover an independent Y skew
    pub skew_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for Matrix2d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2d {
    /// Identity matrix
    pub const IDENTITY: Matrix2d = Matrix2d::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Create a matrix from its six components
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pure translation
    pub const fn translate(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Pure scale
    pub const fn scale(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Pure rotation by `degrees`
    pub fn rotate(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Pure horizontal skew by `degrees`
    pub fn skew_x(degrees: f64) -> Self {
        Self::new(1.0, 0.0, degrees.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    /// Matrix product `self × other` (apply `other` first, then `self`)
    pub fn then(self, other: Matrix2d) -> Matrix2d {
        Matrix2d::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.e + self.c * other.f + self.e,
            self.b * other.e + self.d * other.f + self.f,
        )
    }

    /// Parse a computed `transform` value.
    ///
    /// Returns `None` for `none`, for 3D matrices and for anything that is
    /// not a well-formed six-component `matrix(...)`.
    pub fn parse_css(value: &str) -> Option<Matrix2d> {
        let value = value.trim();
        let inner = value.strip_prefix("matrix(")?.strip_suffix(')')?;

        let mut parts = [0.0f64; 6];
        let mut count = 0;
        for token in inner.split(',') {
            if count == 6 {
                return None;
            }
            parts[count] = token.trim().parse().ok()?;
            count += 1;
        }
        if count != 6 {
            return None;
        }

        let [a, b, c, d, e, f] = parts;
        Some(Matrix2d::new(a, b, c, d, e, f))
    }

    /// Render as a CSS `matrix(...)` value
    pub fn to_css(&self) -> String {
        format!(
            "matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }

    /// Decompose into rotation, scale, skew and translation
    pub fn decompose(&self) -> Decomposed {
        let Matrix2d { a, b, c, d, e, f } = *self;

        let angle = b.atan2(a);
        let denom = a * a + b * b;
        let scale_x = denom.sqrt();
        let scale_y = match (a * d - c * b) / scale_x {
            s if s == 0.0 || !s.is_finite() => 1.0,
            s => s,
        };
        let skew_x = (a * c + b * d).atan2(denom);

        Decomposed {
            angle: angle.to_degrees(),
            scale_x,
            scale_y,
            skew_x: skew_x.to_degrees(),
            skew_y: 0.0,
            translate_x: e,
            translate_y: f,
        }
    }
}
