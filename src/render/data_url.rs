//! `data:` URL wrapping for rendered images

use base64::{Engine as _, engine::general_purpose::STANDARD};

pub const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Wrap an SVG document in a base64 `data:` URL usable as an `<img src>`.
pub fn svg_data_url(svg: &str) -> String {
    format!("{SVG_DATA_URL_PREFIX}{}", STANDARD.encode(svg.as_bytes()))
}
