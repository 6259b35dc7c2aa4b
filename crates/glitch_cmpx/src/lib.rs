//! Equality predicates for fixed-size vectors and colors.
//!
//! Two families:
//!
//! - **Exact**: [`vec_is_equal`] and the `vecN_is_equal` shorthands compare
//!   every element with `==`. `NaN` never equals anything, including itself.
//! - **Tolerant**: [`Vec2`], [`Vec3`] and [`Color`] compare every component
//!   within [`EPSILON`].
//!
//! Both only produce a `bool` for `glitch::check!`.

/// Largest absolute difference still treated as equal by the tolerant family.
pub const EPSILON: f64 = 1e-6;

/// Element-wise exact equality of two arrays of the same length.
#[inline]
pub fn vec_is_equal<T: PartialEq, const N: usize>(a: &[T; N], b: &[T; N]) -> bool {
    a.iter().zip(b).all(|(x, y)| x == y)
}

#[inline]
pub fn vec2_is_equal(a: &[f32; 2], b: &[f32; 2]) -> bool {
    vec_is_equal(a, b)
}

#[inline]
pub fn vec3_is_equal(a: &[f32; 3], b: &[f32; 3]) -> bool {
    vec_is_equal(a, b)
}

#[inline]
pub fn vec4_is_equal(a: &[f32; 4], b: &[f32; 4]) -> bool {
    vec_is_equal(a, b)
}

/// `|a - b| < EPSILON`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn approx_eq(&self, other: &Vec2) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    pub fn approx_eq(&self, other: &Vec3) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

/// RGBA color with components nominally in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    pub fn approx_eq(&self, other: &Color) -> bool {
        approx_eq(self.r, other.r)
            && approx_eq(self.g, other.g)
            && approx_eq(self.b, other.b)
            && approx_eq(self.a, other.a)
    }
}

#[cfg(test)]
mod tests;
