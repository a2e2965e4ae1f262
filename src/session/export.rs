// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Panel image export.
//!
//! Saving a panel snapshots the list into a bitmap under a fixed filename.
//! During rasterization the panel background is overridden with the export
//! background and restored afterwards, whether or not rasterization
//! succeeded. Rasterization itself is an injectable capability.

use image::{Rgba, RgbaImage};

use super::SessionError;

/// Background color applied to a panel while it is being exported.
pub const EXPORT_BACKGROUND: Rgba<u8> = Rgba([25, 20, 20, 255]);

/// Exportable display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Artists,
    Tracks,
}

impl Panel {
    /// Fixed download filename for this panel.
    pub fn filename(&self) -> &'static str {
        match self {
            Panel::Artists => "top-artists.png",
            Panel::Tracks => "top-tracks.png",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Artists => "Top Artists",
            Panel::Tracks => "Top Tracks",
        }
    }
}

/// Mutable presentation state of a panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelStyle {
    pub background: Rgba<u8>,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            background: Rgba([245, 245, 245, 255]),
        }
    }
}

/// Immutable view of a panel handed to the rasterizer.
#[derive(Debug, Clone)]
pub struct PanelSnapshot {
    pub title: String,
    pub lines: Vec<String>,
    pub background: Rgba<u8>,
}

/// Renders a panel snapshot to an RGBA bitmap.
pub trait Rasterize {
    fn rasterize(&self, snapshot: &PanelSnapshot) -> Result<RgbaImage, SessionError>;
}

/// Default rasterizer: background fill with one contrasting band per
/// entry under a title band.
#[derive(Debug, Clone, Copy)]
pub struct BandRasterizer {
    pub width: u32,
    pub row_height: u32,
}

impl Default for BandRasterizer {
    fn default() -> Self {
        Self {
            width: 600,
            row_height: 48,
        }
    }
}

impl Rasterize for BandRasterizer {
    fn rasterize(&self, snapshot: &PanelSnapshot) -> Result<RgbaImage, SessionError> {
        // Title band + one band per line, with a row of padding below.
        let rows = snapshot.lines.len() as u32 + 2;
        let height = rows * self.row_height;

        let mut canvas = RgbaImage::from_pixel(self.width, height, snapshot.background);

        let band = lighten(snapshot.background, 24);
        let title_band = lighten(snapshot.background, 48);

        fill_band(&mut canvas, 0, self.row_height, title_band);
        for (i, _line) in snapshot.lines.iter().enumerate() {
            let y = (i as u32 + 1) * self.row_height;
            fill_band(&mut canvas, y + 4, self.row_height - 8, band);
        }

        Ok(canvas)
    }
}

fn lighten(color: Rgba<u8>, amount: u8) -> Rgba<u8> {
    Rgba([
        color.0[0].saturating_add(amount),
        color.0[1].saturating_add(amount),
        color.0[2].saturating_add(amount),
        color.0[3],
    ])
}

fn fill_band(canvas: &mut RgbaImage, y: u32, height: u32, color: Rgba<u8>) {
    let max_y = (y + height).min(canvas.height());
    for row in y..max_y {
        for x in 0..canvas.width() {
            canvas.put_pixel(x, row, color);
        }
    }
}
