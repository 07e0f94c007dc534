//! Vector rendering of board states
//!
//! Every board is drawn as a standalone SVG document and can be wrapped in a
//! `data:` URL so the generated page needs no external image files.

mod data_url;
mod svg;

pub use data_url::{SVG_DATA_URL_PREFIX, svg_data_url};
pub use svg::{BoardPalette, BoardSvg, render_board_svg};
