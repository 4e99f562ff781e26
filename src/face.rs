//! Clock face rendering: static decorations and the time sweep.
//!
//! The face layer carries the center dot, the four cardinal labels and the
//! minor tick dots; the hand layer carries the time-proportional arc sweep,
//! its animated radial fill and the pointer line. Both draw into a [`Canvas`]
//! and read the palette without mutating it.

use crate::coordinator::TimeOfDay;
use crate::digits::{self, Alignment};
use crate::palette::Palette;
use crate::raster::Canvas;
use crate::trig::{angle_from_time, polar_to_cartesian, Point, TRIG_MAX_ANGLE};

/// Pixels shaved off every side of the drawing bounds, leaving room for the
/// cardinal labels.
const BOUNDS_MARGIN: i32 = 18;

/// Gap kept between a fully grown fill and the dial center.
const RADIAL_MARGIN: i32 = 8;

const SWEEP_STROKE: i32 = 3;
const POINTER_STROKE: f32 = 2.0;
const LABEL_HEIGHT: i32 = 14;
const TICK_DOT_RADIUS: i32 = 2;

/// Split the sweep into drawable segments. The arc primitives take a
/// non-wrapping `[start, end)` pair covering at most half the dial, so a
/// sweep that crosses the dial bottom is issued as the whole lower half
/// followed by the wrapped remainder.
pub fn sweep_segments(angle: i32) -> Vec<(i32, i32)> {
    let half = TRIG_MAX_ANGLE / 2;
    let angle = angle.rem_euclid(TRIG_MAX_ANGLE);
    if angle < half {
        vec![(half, TRIG_MAX_ANGLE), (0, angle)]
    } else {
        vec![(half, angle)]
    }
}

/// Fill band thickness for the current animation state.
pub fn inset_pixels(hand_length: i32, inset_percent: i32) -> i32 {
    (hand_length - RADIAL_MARGIN) * inset_percent.clamp(0, 100) / 100
}

/// Static decorations, all in the legibility-derived foreground.
pub fn draw_face(canvas: &mut Canvas, palette: &Palette) {
    tracing::debug!("drawing face layer");
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let center = Point::new(width / 2, height / 2);
    let fg = palette.foreground;

    canvas.stroke_circle(center, 6, 1, fg);
    canvas.fill_circle(center, 5, fg);

    // cardinal labels, clockwise from the 0-hour mark at the bottom
    digits::draw_number(
        canvas,
        "0",
        Point::new(center.x, height - 2 - LABEL_HEIGHT),
        Alignment::Center,
        LABEL_HEIGHT,
        fg,
    );
    digits::draw_number(
        canvas,
        "6",
        Point::new(2, center.y - LABEL_HEIGHT / 2),
        Alignment::Left,
        LABEL_HEIGHT,
        fg,
    );
    digits::draw_number(
        canvas,
        "12",
        Point::new(center.x, 2),
        Alignment::Center,
        LABEL_HEIGHT,
        fg,
    );
    digits::draw_number(
        canvas,
        "18",
        Point::new(width - 2, center.y - LABEL_HEIGHT / 2),
        Alignment::Right,
        LABEL_HEIGHT,
        fg,
    );

    // minor dots at every non-cardinal hour position
    let dot_ring_radius = (width / 2 - 2).min(height / 2 - 2);
    for i in 0..24 {
        if i % 6 == 0 {
            continue;
        }
        let angle = i * TRIG_MAX_ANGLE / 24;
        let pt = polar_to_cartesian(angle, dot_ring_radius, center);
        canvas.fill_circle(pt, TICK_DOT_RADIUS, fg);
    }
}

/// The time sweep: outline arc and radial fill in accent, pointer line in
/// foreground.
pub fn draw_hand(canvas: &mut Canvas, palette: &Palette, time: TimeOfDay, inset_percent: i32) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let center = Point::new(width / 2, height / 2);

    let reduced_w = width - 2 * BOUNDS_MARGIN;
    let reduced_h = height - 2 * BOUNDS_MARGIN;
    let hand_length = reduced_w.min(reduced_h) / 2;

    let angle = angle_from_time(time.hour, time.minute);
    let inset = inset_pixels(hand_length, inset_percent);
    tracing::debug!(angle, inset, "drawing hand layer");

    let accent = palette.accent;
    for (start, end) in sweep_segments(angle) {
        canvas.stroke_arc(center, hand_length, SWEEP_STROKE, start, end, accent);
        canvas.fill_radial(center, hand_length, inset, start, end, accent);
    }

    // vertical stroke anchoring the fill's inner edge to the dial bottom
    if inset > 0 {
        let bottom = Point::new(center.x, center.y + hand_length);
        let top = Point::new(center.x, center.y + hand_length - inset);
        canvas.stroke_line(top, bottom, SWEEP_STROKE as f32, accent);
    }

    let tip = polar_to_cartesian(angle, hand_length, center);
    canvas.stroke_line(center, tip, POINTER_STROKE, palette.foreground);
}
