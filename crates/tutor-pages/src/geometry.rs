//! Plane geometry shared by the pages: vectors, sampling, arcs and the
//! two-circle intersection used by the Venn diagram.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn unit(self) -> Self {
        self * (1.0 / self.norm())
    }

    /// Rotated a quarter turn counter-clockwise.
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Direction in radians, measured from the positive x axis.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// `count` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i + 1 == count { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Display form of a computed number: float noise below 1e-10 is dropped,
/// whole numbers print without a fractional part and `-0` prints as `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let cleaned = round_to(value, 10);
    if cleaned == 0.0 {
        return "0".to_string();
    }
    cleaned.to_string()
}

/// Mean of the values, NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Points of a circular arc around `vertex`, sweeping from `v1` by the
/// angle between `v1` and `v2`.
///
/// The sweep turns towards `v2` when `inside` is set and away from it
/// otherwise.
pub fn angle_arc(
    vertex: Vec2,
    v1: Vec2,
    v2: Vec2,
    radius: f64,
    steps: usize,
    inside: bool,
) -> (Vec<f64>, Vec<f64>) {
    let u1 = v1.unit();
    let u2 = v2.unit();
    let mut perp = u1.perp();
    let toward = perp.dot(u2);
    if (inside && toward < 0.0) || (!inside && toward > 0.0) {
        perp = -perp;
    }
    sweep(vertex, u1, perp, angle_between(u1, u2), radius, steps)
}

/// Like [`angle_arc`], but the sweep turns towards `outward`.
pub fn outer_arc(
    vertex: Vec2,
    v1: Vec2,
    v2: Vec2,
    outward: Vec2,
    radius: f64,
    steps: usize,
) -> (Vec<f64>, Vec<f64>) {
    let u1 = v1.unit();
    let u2 = v2.unit();
    let mut perp = u1.perp();
    if perp.dot(outward) < 0.0 {
        perp = -perp;
    }
    sweep(vertex, u1, perp, angle_between(u1, u2), radius, steps)
}

fn angle_between(u1: Vec2, u2: Vec2) -> f64 {
    u1.dot(u2).clamp(-1.0, 1.0).acos()
}

fn sweep(
    vertex: Vec2,
    u1: Vec2,
    perp: Vec2,
    angle: f64,
    radius: f64,
    steps: usize,
) -> (Vec<f64>, Vec<f64>) {
    linspace(0.0, angle, steps)
        .into_iter()
        .map(|t| vertex + (u1 * t.cos() + perp * t.sin()) * radius)
        .map(|point| (point.x, point.y))
        .unzip()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub const fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            radius,
        }
    }

    /// SVG path of the full circle, drawn as two half arcs.
    pub fn path(&self) -> String {
        let Vec2 { x: cx, y: cy } = self.center;
        let r = self.radius;
        format!(
            "M {:.6} {:.6} A {r:.6} {r:.6} 0 1 0 {:.6} {:.6} A {r:.6} {r:.6} 0 1 0 {:.6} {:.6} Z",
            cx + r,
            cy,
            cx - r,
            cy,
            cx + r,
            cy,
        )
    }
}

/// The two crossing points of two circle outlines.
///
/// `None` when the circles are apart or touching (`d >= r0 + r1`), one lies
/// inside the other (`d <= |r0 - r1|`) or they share a center.
pub fn intersection_points(c0: Circle, c1: Circle) -> Option<(Vec2, Vec2)> {
    let delta = c1.center - c0.center;
    let d = delta.norm();
    if d <= 1e-9 || d >= c0.radius + c1.radius || d <= (c0.radius - c1.radius).abs() {
        return None;
    }

    let a = (c0.radius.powi(2) - c1.radius.powi(2) + d * d) / (2.0 * d);
    let h = (c0.radius.powi(2) - a * a).max(0.0).sqrt();
    let mid = c0.center + delta * (a / d);
    let offset = Vec2::new(-delta.y, delta.x) * (h / d);
    Some((mid + offset, mid - offset))
}

/// SVG path of the lens shared by two circles: an arc on `c0` from the
/// first crossing point to the second, then an arc on `c1` back.
pub fn intersection_path(c0: Circle, c1: Circle) -> Option<String> {
    let (p1, p2) = intersection_points(c0, c1)?;
    let sweep_a = sweep_flag((p1 - c0.center).angle(), (p2 - c0.center).angle());
    let sweep_b = sweep_flag((p2 - c1.center).angle(), (p1 - c1.center).angle());
    Some(format!(
        "M {:.6} {:.6} A {r0:.6} {r0:.6} 0 0 {sweep_a} {:.6} {:.6} A {r1:.6} {r1:.6} 0 0 {sweep_b} {:.6} {:.6} Z",
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        p1.x,
        p1.y,
        r0 = c0.radius,
        r1 = c1.radius,
    ))
}

fn sweep_flag(from: f64, to: f64) -> u8 {
    if (to - from).rem_euclid(2.0 * PI) > PI { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let samples = linspace(-1.0, 1.0, 5);
        assert_eq!(samples, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn format_number_drops_float_noise() {
        assert_eq!(format_number(0.1 * 3.0), "0.3");
        assert_eq!(format_number(110.0), "110");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn circle_path_starts_on_the_right() {
        let path = Circle::new(200.0, 160.0, 120.0).path();
        assert!(path.starts_with("M 320.000000 160.000000 A 120.000000"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn overlapping_circles_cross_twice() {
        let (p1, p2) =
            intersection_points(Circle::new(0.0, 0.0, 5.0), Circle::new(8.0, 0.0, 5.0)).unwrap();
        assert!((p1.x - 4.0).abs() < 1e-9 && (p1.y - 3.0).abs() < 1e-9);
        assert!((p2.x - 4.0).abs() < 1e-9 && (p2.y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn separate_nested_and_concentric_circles_do_not_cross() {
        let base = Circle::new(0.0, 0.0, 1.0);
        assert!(intersection_points(base, Circle::new(2.0, 0.0, 1.0)).is_none());
        assert!(intersection_points(base, Circle::new(0.1, 0.0, 0.2)).is_none());
        assert!(intersection_points(base, Circle::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn arcs_keep_their_radius() {
        let vertex = Vec2::new(1.0, 1.0);
        let (xs, ys) = angle_arc(vertex, Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0), 0.5, 10, true);
        assert_eq!(xs.len(), 10);
        for (x, y) in xs.iter().zip(&ys) {
            assert!((Vec2::new(*x, *y).distance(vertex) - 0.5).abs() < 1e-12);
        }
        // Quarter turn towards +y.
        assert!((xs[9] - 1.0).abs() < 1e-12);
        assert!((ys[9] - 1.5).abs() < 1e-12);
    }
}
