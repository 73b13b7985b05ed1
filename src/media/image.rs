// SPDX-License-Identifier: MPL-2.0
//! Source resolution and decoding into the editor's working raster.
//!
//! Supports common raster formats (PNG, JPEG, GIF, WebP, ...) as well as SVG,
//! from filesystem paths, `file://` and `http(s)://` URLs, and `data:` URIs.

use crate::domain::editing::Size;
use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image_rs::{ImageBuffer, RgbaImage};
use resvg::usvg;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::{ColorU8, IntSize, Pixmap};

/// Decoded RGBA raster owned by one editor session.
///
/// Pixels are shared behind an `Arc` so snapshots of editor state stay cheap;
/// the raster itself is never mutated, only replaced.
#[derive(Clone, PartialEq)]
pub struct LoadedImage {
    pixels: Arc<RgbaImage>,
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl LoadedImage {
    /// Wraps an RGBA image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for images with a zero dimension.
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(Error::Decode("image has empty dimensions".into()));
        }
        Ok(Self {
            pixels: Arc::new(image),
        })
    }

    /// Builds an image from raw straight-alpha RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the buffer length does not match the
    /// dimensions or a dimension is zero.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let buffer = ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| {
            Error::Decode(format!("pixel buffer does not match {width}x{height}"))
        })?;
        Self::from_rgba_image(buffer)
    }

    /// Decodes encoded bytes, rasterizing SVG documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] for unparseable or empty SVGs and
    /// [`Error::Decode`] for any other undecodable input.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if looks_like_svg(bytes) {
            return Self::rasterize_svg(bytes);
        }
        let decoded = image_rs::load_from_memory(bytes)?;
        Self::from_rgba_image(decoded.to_rgba8())
    }

    fn rasterize_svg(bytes: &[u8]) -> Result<Self> {
        let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let rgba = rgba_from_pixmap(&pixmap)
            .ok_or_else(|| Error::Svg("Failed to read back SVG pixels".into()))?;
        Self::from_rgba_image(rgba)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Natural size as floating point, for transform math.
    #[must_use]
    pub fn natural_size(&self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (self.width() as f32, self.height() as f32);
        Size::new(width, height)
    }

    #[must_use]
    pub fn rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Converts to a premultiplied `tiny_skia` pixmap for drawing.
    #[must_use]
    pub fn to_pixmap(&self) -> Option<Pixmap> {
        let size = IntSize::from_wh(self.width(), self.height())?;
        let mut data = Vec::with_capacity(self.pixels.as_raw().len());
        for pixel in self.pixels.pixels() {
            let [r, g, b, a] = pixel.0;
            let color = ColorU8::from_rgba(r, g, b, a).premultiply();
            data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        Pixmap::from_vec(data, size)
    }
}

/// Reads a premultiplied pixmap back into a straight-alpha RGBA image.
#[must_use]
pub fn rgba_from_pixmap(pixmap: &Pixmap) -> Option<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    ImageBuffer::from_raw(pixmap.width(), pixmap.height(), data)
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map_or(&bytes[..0], |i| &bytes[i..]);
    start.starts_with(b"<svg")
        || (start.starts_with(b"<?xml") && contains(start, b"<svg"))
        || (start.starts_with(b"<!DOCTYPE svg"))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

// =============================================================================
// Sources
// =============================================================================

/// Where the editor's source raster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file.
    Path(PathBuf),
    /// Remote `http://` or `https://` URL.
    Url(String),
    /// Inline `data:` URI.
    DataUri(String),
}

impl ImageSource {
    /// Classifies a source string. Returns `None` for empty input.
    #[must_use]
    pub fn parse(source: &str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }

        let lower = source.to_ascii_lowercase();
        if lower.starts_with("data:") {
            Some(Self::DataUri(source.to_string()))
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            Some(Self::Url(source.to_string()))
        } else if lower.starts_with("file://") {
            Some(Self::Path(PathBuf::from(&source["file://".len()..])))
        } else {
            Some(Self::Path(PathBuf::from(source)))
        }
    }

    /// Short human-readable label (data URIs are not echoed in full).
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
            Self::DataUri(uri) => {
                let header = uri.split(',').next().unwrap_or("data:");
                format!("{header},…")
            }
        }
    }
}

/// Decodes the payload of a `data:` URI.
///
/// # Errors
///
/// Returns [`Error::Decode`] for URIs without a payload separator or with
/// invalid base64.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .get("data:".len()..)
        .ok_or_else(|| Error::Decode("not a data URI".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Decode("data URI has no payload".into()))?;

    if header
        .split(';')
        .any(|param| param.trim().eq_ignore_ascii_case("base64"))
    {
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        BASE64
            .decode(compact)
            .map_err(|e| Error::Decode(format!("invalid base64 payload: {e}")))
    } else {
        Ok(percent_decode(payload))
    }
}

fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(value) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(value);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Loads and decodes a file synchronously.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, otherwise the
/// errors of [`LoadedImage::decode`].
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<LoadedImage> {
    let bytes = std::fs::read(path)?;
    LoadedImage::decode(&bytes)
}

/// Fetches and decodes a source.
///
/// Decoding runs on the blocking pool so the UI runtime stays responsive.
///
/// # Errors
///
/// Returns I/O, HTTP or decode errors depending on the source kind.
pub async fn load(source: ImageSource) -> Result<LoadedImage> {
    let bytes = match &source {
        ImageSource::Path(path) => tokio::fs::read(path).await?,
        ImageSource::Url(url) => reqwest::get(url.as_str())
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec(),
        ImageSource::DataUri(uri) => decode_data_uri(uri)?,
    };

    tokio::task::spawn_blocking(move || LoadedImage::decode(&bytes))
        .await
        .map_err(|e| Error::Decode(format!("decoder task failed: {e}")))?
}
