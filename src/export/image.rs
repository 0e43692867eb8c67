//! Chart image export
//!
//! Rendering is not done here: a `ChartCapture` implementor supplies the RGBA
//! raster of a chart and this module flattens it onto a white background and
//! encodes it as PNG.

use std::io::Cursor;

use chrono::NaiveDate;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use super::{ExportFile, chart_image_filename};
use crate::config::ExportConfig;
use crate::error::{DashboardError, Result};

const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Source of a chart raster
pub trait ChartCapture {
    /// Rasterise the chart at `pixel_ratio` device pixels per CSS pixel
    fn capture(&self, pixel_ratio: f32) -> Result<RgbaImage>;
}

/// A pre-rendered raster at 1x, scaled up on capture
impl ChartCapture for RgbaImage {
    fn capture(&self, pixel_ratio: f32) -> Result<RgbaImage> {
        if self.width() == 0 || self.height() == 0 {
            return Err(DashboardError::capture("chart raster is empty"));
        }
        let width = scaled(self.width(), pixel_ratio)?;
        let height = scaled(self.height(), pixel_ratio)?;
        Ok(imageops::resize(self, width, height, FilterType::Nearest))
    }
}

fn scaled(length: u32, pixel_ratio: f32) -> Result<u32> {
    let value = (f64::from(length) * f64::from(pixel_ratio)).round();
    if value < 1.0 || value > f64::from(u32::MAX) {
        return Err(DashboardError::capture(format!(
            "pixel ratio {pixel_ratio} gives an invalid size for {length}px"
        )));
    }
    Ok(value as u32)
}

/// Composite every pixel over an opaque white background
fn flatten(mut raster: RgbaImage) -> RgbaImage {
    for pixel in raster.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = u16::from(a);
        let blend = |channel: u8, background: u8| {
            ((u16::from(channel) * alpha + u16::from(background) * (255 - alpha) + 127) / 255) as u8
        };
        *pixel = Rgba([
            blend(r, BACKGROUND[0]),
            blend(g, BACKGROUND[1]),
            blend(b, BACKGROUND[2]),
            255,
        ]);
    }
    raster
}

fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    raster.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Capture a chart at the default 2x density and encode it as PNG
pub fn export_png(capture: &dyn ChartCapture, slug: &str, date: NaiveDate) -> Result<ExportFile> {
    export_png_with(capture, slug, date, &ExportConfig::default())
}

/// Capture a chart and encode it as `<slug>-<date>.png`
///
/// Failures are logged at error level and returned; nothing else is affected.
pub fn export_png_with(
    capture: &dyn ChartCapture,
    slug: &str,
    date: NaiveDate,
    config: &ExportConfig,
) -> Result<ExportFile> {
    let filename = chart_image_filename(slug, date);

    let result = capture
        .capture(config.pixel_ratio)
        .and_then(|raster| encode_png(&flatten(raster)));

    match result {
        Ok(bytes) => {
            log::debug!("Encoded chart {filename} ({} bytes)", bytes.len());
            Ok(ExportFile { filename, bytes })
        }
        Err(e) => {
            log::error!("Failed to export chart {filename}: {e}");
            Err(e)
        }
    }
}
