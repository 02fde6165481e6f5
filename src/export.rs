//! Dashboard Exporter Module
//! Writes the rendered dashboard to a PNG and opens it on request.

use crate::charts::Composite;
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to open {} in an image viewer", .path.display())]
    Display {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Saves and displays rendered dashboards.
pub struct Exporter;

impl Exporter {
    /// Write `composite` as a PNG at its own resolution.
    pub fn save_png(composite: &Composite, output_path: &Path) -> Result<PathBuf, ExportError> {
        let image = RgbImage::from_raw(composite.width, composite.height, composite.pixels.clone())
            .ok_or(ExportError::BufferSize {
                width: composite.width,
                height: composite.height,
            })?;

        image
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(|source| ExportError::Write {
                path: output_path.to_path_buf(),
                source,
            })?;

        Ok(output_path.to_path_buf())
    }

    /// Open a saved image with the system's default viewer.
    pub fn display(path: &Path) -> Result<(), ExportError> {
        open::that(path).map_err(|source| ExportError::Display {
            path: path.to_path_buf(),
            source,
        })
    }
}
