use std::path::Path;

use image::{imageops::FilterType, DynamicImage, RgbImage};

use crate::errors::{DotPaintError, DotPaintResult};
use crate::geometry::{Region, ScreenPoint};
use crate::palette::{nearest_spot, Palette, PaletteSpot};

use super::CancelToken;

/// Screen pixels between neighbouring dots. Matches the footprint of the
/// editor's smallest brush; the user is told to select it before drawing.
pub const DOT_SPACING: i32 = 5;

/// One synthesized device action. Every planned pixel expands to a pair:
/// a click on the matching swatch, then a click on the canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawAction {
    ClickAt(ScreenPoint),
}

/// Lazy, cancelable plan covering every pixel of the downsampled image in
/// row-major order (x outer, y inner). The cancel token is checked once per
/// pixel, before its pair starts, so a started pair always completes and a
/// cancel after N pixels has emitted exactly 2N actions.
#[derive(Debug)]
pub struct DrawPlan {
    pixels: RgbImage,
    origin: ScreenPoint,
    spots: Vec<PaletteSpot>,
    cancel: CancelToken,
    x: u32,
    y: u32,
    queued: Option<DrawAction>,
}

impl DrawPlan {
    /// Decodes the image at `path` and plans it. A decode failure surfaces
    /// here, before any action exists.
    pub fn load(
        path: &Path,
        region: Region,
        palette: &Palette,
        cancel: CancelToken,
    ) -> DotPaintResult<Self> {
        let image = image::open(path).map_err(|source| DotPaintError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image decoded"
        );
        Ok(Self::from_image(image, region, palette, cancel))
    }

    /// Downsamples to one dot per `DOT_SPACING` screen pixels. Both axes are
    /// forced to the same size, distorting non-square sources; a continuous
    /// filter keeps the colors faithful for palette matching.
    pub fn from_image(
        image: DynamicImage,
        region: Region,
        palette: &Palette,
        cancel: CancelToken,
    ) -> Self {
        let target = (region.side / DOT_SPACING) as u32;
        // A degenerate region plans nothing; keep the resampler away from a
        // zero-sized target.
        let pixels = if target == 0 {
            RgbImage::new(0, 0)
        } else {
            image
                .resize_exact(target, target, FilterType::Triangle)
                .to_rgb8()
        };
        Self {
            pixels,
            origin: region.origin,
            spots: palette.spots().to_vec(),
            cancel,
            x: 0,
            y: 0,
            queued: None,
        }
    }
}

impl Iterator for DrawPlan {
    type Item = DrawAction;

    fn next(&mut self) -> Option<DrawAction> {
        if let Some(action) = self.queued.take() {
            return Some(action);
        }
        if self.cancel.is_canceled() || self.x >= self.pixels.width() {
            return None;
        }

        let pixel = *self.pixels.get_pixel(self.x, self.y);
        let spot = nearest_spot(&self.spots, pixel);
        let canvas = ScreenPoint {
            x: self.origin.x + self.x as i32 * DOT_SPACING,
            y: self.origin.y + self.y as i32 * DOT_SPACING,
        };
        self.queued = Some(DrawAction::ClickAt(canvas));

        self.y += 1;
        if self.y >= self.pixels.height() {
            self.y = 0;
            self.x += 1;
        }

        Some(DrawAction::ClickAt(spot.point))
    }
}
