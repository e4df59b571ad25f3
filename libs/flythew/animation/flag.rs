//! Waving flag renderer
//!
//! Generates the base celebration frames: a blue-over-red flag waving on a
//! white pole, with a blocky white "W" riding the wave. The wave is a
//! per-column sine offset whose amplitude grows from the pole (fixed) to
//! the free end.

use std::f64::consts::TAU;

use super::frame::{Frame, Rgb, CUBS_BLUE, CUBS_RED};

/// Number of frames in one full wave cycle.
pub const CYCLE_FRAMES: usize = 16;

/// Fraction of the display width covered by the flag body; the remaining
/// right-side column is reserved for text overlays.
const FLAG_WIDTH_RATIO: f64 = 0.6;

/// Spatial frequency of the wave along the flag, radians per column.
const WAVE_FREQ: f64 = 0.3;

/// Horizontal pixel extent of the flag body.
pub fn flag_width(display_width: usize) -> usize {
    (display_width as f64 * FLAG_WIDTH_RATIO) as usize
}

/// Render one base flag frame for `frame_idx` in `0..CYCLE_FRAMES`.
pub fn render_flag_frame(width: usize, height: usize, frame_idx: usize) -> Frame {
    let mut frame = Frame::new(width, height);

    let phase = TAU * (frame_idx % CYCLE_FRAMES) as f64 / CYCLE_FRAMES as f64;

    let flag_w = flag_width(width);
    let flag_h = height * 3 / 4;
    let flag_top = (height - flag_h) / 2;
    let amplitude = (flag_h / 8).max(1);

    // Flag body, column by column with a sine-wave vertical offset
    for col in 0..flag_w {
        let wave_factor = col as f64 / (flag_w.saturating_sub(1)).max(1) as f64;
        let offset =
            (amplitude as f64 * wave_factor * (phase + col as f64 * WAVE_FREQ).sin()) as i32;

        let col_top = flag_top as i32 + offset;
        let mid = col_top + (flag_h / 2) as i32;

        for row in col_top..col_top + flag_h as i32 {
            let color = if row < mid { CUBS_BLUE } else { CUBS_RED };
            frame.put(col as i32, row, color);
        }
    }

    // "W" centered on the flag, riding the wave at half amplitude
    let cx = (flag_w / 2) as i32;
    let cy = (flag_top + flag_h / 2) as i32;
    let wave_offset = (amplitude as f64 * 0.5 * (phase + cx as f64 * WAVE_FREQ).sin()) as i32;
    draw_w(&mut frame, cx, cy + wave_offset, (height / 16).max(1));

    // Pole: one white column on the left, extending past the flag edges
    for row in flag_top as i32 - 2..=(flag_top + flag_h) as i32 + 2 {
        frame.put(0, row, Rgb::WHITE);
    }

    frame
}

/// (dx, dy) offsets forming a blocky "W" in a ~9x5 grid, centered.
const W_PATTERN: [(i32, i32); 21] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 3),
    (1, 4),
    (2, 2),
    (2, 3),
    (3, 3),
    (3, 4),
    (4, 3),
    (4, 4),
    (5, 2),
    (5, 3),
    (6, 3),
    (6, 4),
    (7, 3),
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
];

fn draw_w(frame: &mut Frame, cx: i32, cy: i32, scale: usize) {
    let scale = scale as i32;
    let half_w = 4 * scale;
    let half_h = 2 * scale;

    for (px, py) in W_PATTERN {
        for sx in 0..scale {
            for sy in 0..scale {
                frame.put(
                    cx + px * scale + sx - half_w,
                    cy + py * scale + sy - half_h,
                    Rgb::WHITE,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_have_requested_dimensions() {
        let frame = render_flag_frame(64, 32, 0);
        assert_eq!(frame.width(), 64);
        assert_eq!(frame.height(), 32);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_flag_frame(64, 32, 5), render_flag_frame(64, 32, 5));
    }

    #[test]
    fn frame_index_wraps_at_cycle_length() {
        assert_eq!(
            render_flag_frame(64, 32, 3),
            render_flag_frame(64, 32, 3 + CYCLE_FRAMES)
        );
    }

    #[test]
    fn pole_is_white() {
        let frame = render_flag_frame(64, 32, 0);
        // flag_h = 24, flag_top = 4; the pole spans rows 2..=30 at x = 0
        assert_eq!(frame.get(0, 2), Some(Rgb::WHITE));
        assert_eq!(frame.get(0, 16), Some(Rgb::WHITE));
        assert_eq!(frame.get(0, 30), Some(Rgb::WHITE));
    }

    #[test]
    fn flag_halves_are_blue_over_red() {
        let frame = render_flag_frame(64, 32, 0);
        // column 1 has wave_factor near 0, so the body sits at rest:
        // rows 4..16 blue, rows 16..28 red
        assert_eq!(frame.get(1, 5), Some(CUBS_BLUE));
        assert_eq!(frame.get(1, 26), Some(CUBS_RED));
    }

    #[test]
    fn right_column_stays_clear_for_overlays() {
        let frame = render_flag_frame(64, 32, 7);
        for y in 0..32 {
            assert_eq!(frame.get(63, y), Some(Rgb::BLACK));
        }
    }

    #[test]
    fn tiny_displays_render_without_panicking() {
        let frame = render_flag_frame(8, 8, 11);
        assert!(!frame.is_blank());
        let _ = render_flag_frame(1, 1, 0);
    }
}
