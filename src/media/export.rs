// SPDX-License-Identifier: MPL-2.0
//! PNG export of the rendered frame.
//!
//! The payload carries everything a host might need: encoded bytes, a
//! `data:` URL, dimensions and a unique file name derived from the template
//! name.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Local};
use image_rs::{ImageFormat, RgbaImage};
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FALLBACK_STEM: &str = "image";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S-%3f";

/// Encoded frame handed to the host on save.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    /// PNG bytes.
    pub png: Arc<Vec<u8>>,
    /// `data:image/png;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

impl fmt::Debug for ExportPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportPayload")
            .field("file_name", &self.file_name)
            .field("bytes", &self.png.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ExportPayload {
    /// Writes the PNG into `dir` under [`Self::file_name`], creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory or file cannot be written.
    pub async fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, self.png.as_slice()).await?;
        Ok(path)
    }
}

/// Lowercases `name` and collapses runs of non-alphanumerics into `-`.
///
/// Returns `"image"` when nothing usable remains.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `{slug}-{YYYYmmdd-HHMMSS-mmm}.png`
#[must_use]
pub fn file_name(template_name: Option<&str>, timestamp: DateTime<Local>) -> String {
    format!(
        "{}-{}.png",
        slugify(template_name.unwrap_or_default()),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Encodes `frame` as PNG.
///
/// # Errors
///
/// Returns [`Error::Encode`] if PNG encoding fails.
pub fn encode_png(frame: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("Failed to encode PNG: {e}")))?;
    Ok(bytes)
}

/// Builds the full export payload for `frame`.
///
/// # Errors
///
/// See [`encode_png`].
pub fn export_frame(
    frame: &RgbaImage,
    template_name: Option<&str>,
    timestamp: DateTime<Local>,
) -> Result<ExportPayload> {
    let png = encode_png(frame)?;
    let data_url = format!("data:image/png;base64,{}", BASE64.encode(&png));
    Ok(ExportPayload {
        file_name: file_name(template_name, timestamp),
        png: Arc::new(png),
        data_url,
        width: frame.width(),
        height: frame.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use image_rs::Rgba;
    use tempfile::tempdir;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn slugify_normalizes_names() {
        assert_eq!(slugify("Summer Sale 2024!"), "summer-sale-2024");
        assert_eq!(slugify("  --Hello__World--  "), "hello-world");
        assert_eq!(slugify("Ünïcode ok"), "n-code-ok");
        assert_eq!(slugify("!!!"), "image");
        assert_eq!(slugify(""), "image");
    }

    #[test]
    fn file_name_appends_timestamp() {
        assert_eq!(
            file_name(Some("Brand Kit"), fixed_time()),
            "brand-kit-20240309-140507-000.png"
        );
        assert_eq!(file_name(None, fixed_time()), "image-20240309-140507-000.png");
    }

    #[test]
    fn export_frame_produces_png_and_data_url() {
        let frame = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let payload = export_frame(&frame, Some("Promo"), fixed_time()).expect("export");

        assert_eq!((payload.width, payload.height), (3, 2));
        assert!(payload.data_url.starts_with("data:image/png;base64,"));
        let decoded = image_rs::load_from_memory(&payload.png).expect("valid png");
        assert_eq!(decoded.to_rgba8().get_pixel(2, 1).0, [10, 20, 30, 255]);

        let from_url = BASE64
            .decode(payload.data_url.trim_start_matches("data:image/png;base64,"))
            .expect("valid base64");
        assert_eq!(from_url, *payload.png);
    }

    #[tokio::test]
    async fn write_to_dir_creates_missing_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let frame = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let payload = export_frame(&frame, Some("out"), fixed_time()).expect("export");

        let target = temp_dir.path().join("nested").join("exports");
        let path = payload.write_to_dir(&target).await.expect("write");
        assert_eq!(path, target.join("out-20240309-140507-000.png"));
        assert_eq!(std::fs::read(&path).expect("read back"), *payload.png);
    }
}
