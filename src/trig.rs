//! Fixed-point dial geometry.
//!
//! Angles are integer fractions of a full turn: `TRIG_MAX_ANGLE` units per
//! revolution, zero at the top of the dial, increasing clockwise. Sine and
//! cosine come from an interpolated lookup table scaled to `TRIG_MAX_RATIO`,
//! so every conversion after table construction stays in integer arithmetic.

use std::sync::LazyLock;

/// Angle units in one full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x1_0000;

/// Magnitude of the fixed-point trig values: `sin_lookup` peaks at
/// `TRIG_MAX_RATIO` a quarter turn in.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// One table entry per `SIN_TABLE_STEP` angle units; values between entries
/// are linearly interpolated.
const SIN_TABLE_LEN: usize = 4096;
const SIN_TABLE_STEP: i32 = TRIG_MAX_ANGLE / SIN_TABLE_LEN as i32;

static SIN_TABLE: LazyLock<[i32; SIN_TABLE_LEN]> = LazyLock::new(|| {
    let mut table = [0i32; SIN_TABLE_LEN];
    for (i, entry) in table.iter_mut().enumerate() {
        let theta = (i as f64) * std::f64::consts::TAU / (SIN_TABLE_LEN as f64);
        *entry = (theta.sin() * f64::from(TRIG_MAX_RATIO)).round() as i32;
    }
    table
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Fixed-point sine of a dial angle, scaled to `TRIG_MAX_RATIO`.
pub fn sin_lookup(angle: i32) -> i32 {
    let a = angle.rem_euclid(TRIG_MAX_ANGLE);
    let idx = (a / SIN_TABLE_STEP) as usize;
    let frac = a % SIN_TABLE_STEP;
    let s0 = SIN_TABLE[idx];
    let s1 = SIN_TABLE[(idx + 1) % SIN_TABLE_LEN];
    s0 + (s1 - s0) * frac / SIN_TABLE_STEP
}

/// Fixed-point cosine, phase-shifted off the sine table.
pub fn cos_lookup(angle: i32) -> i32 {
    sin_lookup(angle + TRIG_MAX_ANGLE / 4)
}

/// Sweep angle for a time of day. The raw angle is measured from the top of
/// the dial; the result is re-based a half turn so the 0-hour mark points
/// down.
pub fn angle_from_time(hour: u8, minute: u8) -> i32 {
    let minutes = i64::from(hour) * 60 + i64::from(minute);
    let raw = (i64::from(TRIG_MAX_ANGLE) * minutes / MINUTES_PER_DAY) as i32;
    (raw + TRIG_MAX_ANGLE / 2) % TRIG_MAX_ANGLE
}

/// Project a dial angle onto the circle of `radius` around `center`.
/// Intermediate products are widened to `i64` before the ratio division.
pub fn polar_to_cartesian(angle: i32, radius: i32, center: Point) -> Point {
    let dx = i64::from(sin_lookup(angle)) * i64::from(radius) / i64::from(TRIG_MAX_RATIO);
    let dy = i64::from(cos_lookup(angle)) * i64::from(radius) / i64::from(TRIG_MAX_RATIO);
    Point::new(center.x + dx as i32, center.y - dy as i32)
}
