//! Text drawing for the stats card.
//!
//! The card prefers the decorative TrueType font. When that file is not
//! installed it falls back to the 8x8 bitmap glyphs from `font8x8`, scaled up
//! by an integer factor.

use std::io;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use super::RenderError;

pub const BODY_PX: f32 = 24.0;
pub const TITLE_PX: f32 = 28.0;

pub const BITMAP_GLYPH: u32 = 8;
pub const BITMAP_BODY_SCALE: u32 = 2;
pub const BITMAP_TITLE_SCALE: u32 = 3;

/// `★`, which none of the font8x8 tables carry.
const STAR_GLYPH: [u8; 8] = [0x08, 0x08, 0x7F, 0x3E, 0x1C, 0x36, 0x22, 0x00];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Body,
    Title,
}

pub enum CardFont {
    TrueType(FontVec),
    Bitmap,
}

impl CardFont {
    /// Load the font at `path`. Only a missing file selects the bitmap
    /// fallback; unreadable or unparsable files are errors.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        match std::fs::read(path) {
            Ok(bytes) => FontVec::try_from_vec(bytes)
                .map(CardFont::TrueType)
                .map_err(|source| RenderError::FontInvalid {
                    path: path.to_path_buf(),
                    source,
                }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Card font not found, using bitmap font");
                Ok(CardFont::Bitmap)
            }
            Err(source) => Err(RenderError::FontIo {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, CardFont::Bitmap)
    }

    /// Rendered width of `text` in pixels.
    pub fn text_width(&self, size: TextSize, text: &str) -> u32 {
        match self {
            CardFont::TrueType(font) => text_size(px_scale(size), font, text).0,
            CardFont::Bitmap => text.chars().count() as u32 * BITMAP_GLYPH * bitmap_scale(size),
        }
    }

    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        color: Rgba<u8>,
        x: i32,
        y: i32,
        size: TextSize,
        text: &str,
    ) {
        match self {
            CardFont::TrueType(font) => {
                draw_text_mut(canvas, color, x, y, px_scale(size), font, text)
            }
            CardFont::Bitmap => draw_bitmap_text(canvas, color, x, y, bitmap_scale(size), text),
        }
    }
}

fn px_scale(size: TextSize) -> PxScale {
    match size {
        TextSize::Body => PxScale::from(BODY_PX),
        TextSize::Title => PxScale::from(TITLE_PX),
    }
}

fn bitmap_scale(size: TextSize) -> u32 {
    match size {
        TextSize::Body => BITMAP_BODY_SCALE,
        TextSize::Title => BITMAP_TITLE_SCALE,
    }
}

fn glyph(c: char) -> [u8; 8] {
    if c == '★' {
        return STAR_GLYPH;
    }
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(canvas: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let cell = (BITMAP_GLYPH * scale) as i32;
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i32 * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..BITMAP_GLYPH {
                // bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = origin_x + (col * scale) as i32;
                let py = y + (row as u32 * scale) as i32;
                draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}
