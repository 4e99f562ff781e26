//! Procedural numeral glyphs for the cardinal tick labels.
//!
//! The face only ever prints digits, so instead of bundling a font asset the
//! labels are rasterized as seven-segment shapes built from filled
//! rectangles, sized to the requested glyph height.

use crate::palette::Color;
use crate::raster::Canvas;
use crate::trig::Point;

/// Horizontal placement of the rendered string relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Segment bits, low to high: top, top-right, bottom-right, bottom,
/// bottom-left, top-left, middle.
const SEGMENTS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// Draw a run of decimal digits. `anchor.y` is the top of the glyph box;
/// `anchor.x` is interpreted per `alignment`. Non-digit characters are
/// skipped.
pub fn draw_number(
    canvas: &mut Canvas,
    text: &str,
    anchor: Point,
    alignment: Alignment,
    height: i32,
    color: Color,
) {
    let digits: Vec<u8> = text
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    if digits.is_empty() {
        return;
    }

    let glyph_w = height / 2;
    let gap = (height / 5).max(2);
    let total_w = digits.len() as i32 * glyph_w + (digits.len() as i32 - 1) * gap;
    let x0 = match alignment {
        Alignment::Left => anchor.x,
        Alignment::Center => anchor.x - total_w / 2,
        Alignment::Right => anchor.x - total_w,
    };

    for (i, &digit) in digits.iter().enumerate() {
        let x = x0 + i as i32 * (glyph_w + gap);
        draw_digit(canvas, digit, x, anchor.y, glyph_w, height, color);
    }
}

fn draw_digit(canvas: &mut Canvas, digit: u8, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let t = (h / 6).max(2);
    let half = h / 2;
    let mask = SEGMENTS[usize::from(digit)];
    if mask & 0x01 != 0 {
        canvas.fill_rect(x, y, w, t, color);
    }
    if mask & 0x02 != 0 {
        canvas.fill_rect(x + w - t, y, t, half, color);
    }
    if mask & 0x04 != 0 {
        canvas.fill_rect(x + w - t, y + half, t, h - half, color);
    }
    if mask & 0x08 != 0 {
        canvas.fill_rect(x, y + h - t, w, t, color);
    }
    if mask & 0x10 != 0 {
        canvas.fill_rect(x, y + half, t, h - half, color);
    }
    if mask & 0x20 != 0 {
        canvas.fill_rect(x, y, t, half, color);
    }
    if mask & 0x40 != 0 {
        canvas.fill_rect(x, y + half - t / 2, w, t, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 64;
    const H: usize = 64;

    fn lit(frame: &[u8]) -> usize {
        frame.chunks_exact(4).filter(|px| px[0] != 0).count()
    }

    #[test]
    fn every_digit_has_a_shape() {
        for digit in 0..10u8 {
            let mut frame = vec![0u8; W * H * 4];
            let mut canvas = Canvas::new(&mut frame, W, H);
            draw_number(
                &mut canvas,
                &digit.to_string(),
                Point::new(20, 20),
                Alignment::Left,
                14,
                Color::WHITE,
            );
            assert!(lit(&frame) > 0, "digit {digit} drew nothing");
        }
    }

    #[test]
    fn eight_lights_more_than_one() {
        let draw = |text: &str| {
            let mut frame = vec![0u8; W * H * 4];
            let mut canvas = Canvas::new(&mut frame, W, H);
            draw_number(&mut canvas, text, Point::new(20, 20), Alignment::Left, 14, Color::WHITE);
            lit(&frame)
        };
        assert!(draw("8") > draw("1"));
    }

    #[test]
    fn right_alignment_ends_at_the_anchor() {
        let mut frame = vec![0u8; W * H * 4];
        let mut canvas = Canvas::new(&mut frame, W, H);
        draw_number(&mut canvas, "18", Point::new(60, 20), Alignment::Right, 14, Color::WHITE);
        // nothing to the right of the anchor
        for y in 0..H {
            for x in 60..W {
                let idx = (y * W + x) * 4;
                assert_eq!(frame[idx], 0);
            }
        }
        assert!(lit(&frame) > 0);
    }

    #[test]
    fn non_digits_are_skipped() {
        let mut frame = vec![0u8; W * H * 4];
        let mut canvas = Canvas::new(&mut frame, W, H);
        draw_number(&mut canvas, "a-b", Point::new(20, 20), Alignment::Left, 14, Color::WHITE);
        assert_eq!(lit(&frame), 0);
    }
}
