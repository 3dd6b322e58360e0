//! Stats card rendering.
//!
//! The card is the background template with a centered, prestige-colored
//! title and three columns of label/value pairs, encoded as PNG.

pub mod font;

use std::io::Cursor;
use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::model::bedwars::{DerivedRatios, StatBlock};
use crate::model::prestige::Prestige;
use font::{CardFont, TextSize};

pub const CARD_FILENAME: &str = "stats.png";

pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub const SHADOW: Rgba<u8> = Rgba([45, 45, 45, 255]);
pub const SHADOW_OFFSET: i32 = 2;

pub const TITLE_Y: i32 = 20;
pub const ROW_START_Y: i32 = 80;
pub const ROW_SPACING: i32 = 40;
/// Rows of the three label lines; each value sits one row below its label.
pub const LABEL_ROWS: [i32; 3] = [0, 3, 6];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to load background {path}: {source}")]
    Background {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid font {path}: {source}")]
    FontInvalid {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
    #[error("failed to encode card: {0}")]
    Encode(#[source] image::ImageError),
    #[error("render task failed: {0}")]
    Task(String),
}

/// PNG bytes ready to attach to a message.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Horizontal positions of the three stat columns for a canvas width.
pub fn column_xs(canvas_width: u32) -> [i32; 3] {
    let width = canvas_width as i32;
    [50, width / 2 - 50, width - 150]
}

/// Left edge that centers `text_width` on the canvas, clamped at 0.
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width.saturating_sub(text_width) / 2) as i32
}

pub fn title_text(level: u32, display_name: &str) -> String {
    format!("[{}★] {}", level, display_name)
}

#[derive(Debug, Clone)]
pub struct CardRenderer {
    background_path: PathBuf,
    font_path: PathBuf,
}

impl CardRenderer {
    pub fn new(background_path: impl Into<PathBuf>, font_path: impl Into<PathBuf>) -> Self {
        CardRenderer {
            background_path: background_path.into(),
            font_path: font_path.into(),
        }
    }

    /// Load the assets, draw the card and encode it. Nothing is returned
    /// unless every step succeeds.
    pub fn render(
        &self,
        stats: &StatBlock,
        display_name: &str,
        level: u32,
    ) -> Result<RenderedCard, RenderError> {
        let canvas = image::open(&self.background_path)
            .map_err(|source| RenderError::Background {
                path: self.background_path.clone(),
                source,
            })?
            .to_rgba8();
        let font = CardFont::load(&self.font_path)?;

        let canvas = draw_card(canvas, &font, stats, display_name, level);
        let bytes = encode_png(canvas)?;

        tracing::debug!(player = display_name, size = bytes.len(), "Rendered stats card");
        Ok(RenderedCard {
            filename: CARD_FILENAME,
            bytes,
        })
    }

    /// [`render`](Self::render) on the blocking pool.
    pub async fn render_blocking(
        &self,
        stats: StatBlock,
        display_name: String,
        level: u32,
    ) -> Result<RenderedCard, RenderError> {
        let renderer = self.clone();
        tokio::task::spawn_blocking(move || renderer.render(&stats, &display_name, level))
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

/// Draw the title and the stat columns onto `canvas`.
pub fn draw_card(
    mut canvas: RgbaImage,
    font: &CardFont,
    stats: &StatBlock,
    display_name: &str,
    level: u32,
) -> RgbaImage {
    let ratios = DerivedRatios::from_stats(stats);
    let width = canvas.width();

    let title = title_text(level, display_name);
    let title_x = centered_x(width, font.text_width(TextSize::Title, &title));
    let title_color = Prestige::for_level(level).color();
    draw_with_shadow(&mut canvas, font, title_x, TITLE_Y, TextSize::Title, &title, title_color);

    let [x_left, x_mid, x_right] = column_xs(width);
    let columns: [(i32, Rgba<u8>, [(&str, String); 3]); 3] = [
        (
            x_left,
            GREEN,
            [
                ("Wins", stats.wins.to_string()),
                ("Final Kills", stats.final_kills.to_string()),
                ("Beds Broken", stats.beds_broken.to_string()),
            ],
        ),
        (
            x_mid,
            RED,
            [
                ("Losses", stats.losses.to_string()),
                ("Final Deaths", stats.final_deaths.to_string()),
                ("Beds Lost", stats.beds_lost.to_string()),
            ],
        ),
        (
            x_right,
            YELLOW,
            [
                ("WLR", ratios.wlr.to_string()),
                ("FKDR", ratios.fkdr.to_string()),
                ("BBLR", ratios.bblr.to_string()),
            ],
        ),
    ];

    for (x, color, pairs) in &columns {
        for ((label, value), row) in pairs.iter().zip(LABEL_ROWS) {
            let y = ROW_START_Y + ROW_SPACING * row;
            draw_with_shadow(&mut canvas, font, *x, y, TextSize::Body, label, *color);
            draw_with_shadow(&mut canvas, font, *x, y + ROW_SPACING, TextSize::Body, value, *color);
        }
    }

    canvas
}

fn draw_with_shadow(
    canvas: &mut RgbaImage,
    font: &CardFont,
    x: i32,
    y: i32,
    size: TextSize,
    text: &str,
    color: Rgba<u8>,
) {
    font.draw(canvas, SHADOW, x + SHADOW_OFFSET, y + SHADOW_OFFSET, size, text);
    font.draw(canvas, color, x, y, size, text);
}

fn encode_png(canvas: RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(RenderError::Encode)?;
    Ok(bytes)
}
