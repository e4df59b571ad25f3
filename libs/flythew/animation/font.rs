//! Built-in bitmap font for overlays
//!
//! A single 4x6 face (3-pixel glyphs plus a 1-pixel gap) covering the
//! characters the overlays use: letters, digits, and basic punctuation.
//! The face is baked in; `font_size` selects an integer scale factor.

use thiserror::Error;

use super::frame::{Frame, Rgb};

/// Native glyph cell: 3 visible columns + 1 spacing column, 6 rows
/// (5 used, 1 baseline padding).
pub const GLYPH_WIDTH: usize = 4;
pub const GLYPH_HEIGHT: usize = 6;

/// Name of the one face this unit ships with.
pub const BUILTIN_FACE: &str = "4x6";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unknown font face {0:?} (only {BUILTIN_FACE:?} is bundled)")]
    UnknownFont(String),
}

/// Cached, scaled font handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    scale: usize,
}

impl Font {
    /// Resolve a configured face name and pixel size.
    ///
    /// `size` is rounded down to a whole multiple of the native height;
    /// anything below the native height renders at scale 1.
    pub fn load(name: &str, size: u32) -> Result<Self, RenderError> {
        if name != BUILTIN_FACE {
            return Err(RenderError::UnknownFont(name.to_string()));
        }
        Ok(Self {
            scale: (size as usize / GLYPH_HEIGHT).max(1),
        })
    }

    /// The fallback face at native size.
    pub fn default_font() -> Self {
        Self { scale: 1 }
    }

    pub fn char_height(&self) -> usize {
        GLYPH_HEIGHT * self.scale
    }

    /// Horizontal advance per character.
    pub fn char_advance(&self) -> usize {
        GLYPH_WIDTH * self.scale
    }

    /// Rendered width of a string (without the trailing glyph gap).
    pub fn text_width(&self, text: &str) -> usize {
        let chars = text.chars().count();
        if chars == 0 {
            return 0;
        }
        chars * self.char_advance() - self.scale
    }

    /// Draw `text` with its top-left corner at `(x, y)`, clipping at the
    /// frame edges.
    pub fn draw_text(&self, frame: &mut Frame, x: i32, y: i32, text: &str, color: Rgb) {
        let mut pen_x = x;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (row_idx, row) in rows.iter().enumerate() {
                for col in 0..3 {
                    if row & (0b100 >> col) == 0 {
                        continue;
                    }
                    for sy in 0..self.scale {
                        for sx in 0..self.scale {
                            frame.put(
                                pen_x + (col * self.scale + sx) as i32,
                                y + (row_idx * self.scale + sy) as i32,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += self.char_advance() as i32;
        }
    }
}

/// Glyph rows, top to bottom; low 3 bits are the visible columns.
/// Characters without a glyph render as blanks.
fn glyph(ch: char) -> [u8; GLYPH_HEIGHT] {
    let rows: [u8; 5] = match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b011],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b110, 0b001, 0b010, 0b100, 0b111],
        '3' => [0b110, 0b001, 0b010, 0b001, 0b110],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b110, 0b001, 0b110],
        '6' => [0b011, 0b100, 0b110, 0b101, 0b010],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b010, 0b101, 0b010, 0b101, 0b010],
        '9' => [0b010, 0b101, 0b011, 0b001, 0b110],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        _ => [0b000; 5],
    };
    [rows[0], rows[1], rows[2], rows[3], rows[4], 0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_face_is_an_error() {
        let err = Font::load("comic-sans", 6).unwrap_err();
        assert!(matches!(err, RenderError::UnknownFont(_)));
    }

    #[test]
    fn builtin_face_scales_by_size() {
        assert_eq!(Font::load(BUILTIN_FACE, 6).unwrap().char_height(), 6);
        assert_eq!(Font::load(BUILTIN_FACE, 12).unwrap().char_height(), 12);
        // below native size clamps to scale 1
        assert_eq!(Font::load(BUILTIN_FACE, 1).unwrap().char_height(), 6);
    }

    #[test]
    fn text_width_accounts_for_spacing() {
        let font = Font::default_font();
        assert_eq!(font.text_width(""), 0);
        assert_eq!(font.text_width("W"), 3);
        assert_eq!(font.text_width("WIN!"), 15);
    }

    #[test]
    fn draw_text_marks_pixels() {
        let font = Font::default_font();
        let mut frame = Frame::new(16, 8);
        font.draw_text(&mut frame, 0, 0, "W", Rgb::WHITE);
        assert!(!frame.is_blank());
        // 'W' row 0 is 101: corner pixels set, middle clear
        assert_eq!(frame.get(0, 0), Some(Rgb::WHITE));
        assert_eq!(frame.get(1, 0), Some(Rgb::BLACK));
        assert_eq!(frame.get(2, 0), Some(Rgb::WHITE));
    }

    #[test]
    fn draw_text_clips_at_edges() {
        let font = Font::default_font();
        let mut frame = Frame::new(4, 4);
        // spills off every edge without panicking
        font.draw_text(&mut frame, -2, -2, "WIN! WIN!", Rgb::WHITE);
        font.draw_text(&mut frame, 3, 3, "88", Rgb::GOLD);
    }
}
