//! SVG drawing of a single board

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Cell};

/// Fraction of the smaller cell side kept clear around each mark
const MARK_PADDING: f64 = 0.28;

/// Base stroke as a fraction of the image width
const STROKE_RATIO: f64 = 0.03;

/// Grid lines are thinner than the marks
const GRID_STROKE_RATIO: f64 = 0.45;

const MIN_BASE_STROKE: f64 = 1.0;
const MIN_MARK_STROKE: f64 = 2.0;

/// Colours and corner rounding of a rendered board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardPalette {
    pub background: String,
    pub grid: String,
    pub x_mark: String,
    pub o_mark: String,
    pub corner_radius: f64,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            grid: "#1b1b1b".to_string(),
            x_mark: "#d72638".to_string(),
            o_mark: "#3a86ff".to_string(),
            corner_radius: 8.0,
        }
    }
}

/// A board bound to a pixel size and palette; `Display` writes the SVG document.
pub struct BoardSvg<'a> {
    pub board: &'a BoardState,
    pub width: u32,
    pub height: u32,
    pub palette: &'a BoardPalette,
}

impl BoardSvg<'_> {
    fn write_grid(&self, f: &mut fmt::Formatter<'_>, base_stroke: f64) -> fmt::Result {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let stroke = base_stroke * GRID_STROKE_RATIO;
        for i in 1..3 {
            let x = f64::from(i) * w / 3.0;
            let y = f64::from(i) * h / 3.0;
            write!(
                f,
                r#"<line x1="{x:.2}" y1="0" x2="{x:.2}" y2="{h}" stroke="{}" stroke-width="{stroke:.2}"/>"#,
                self.palette.grid
            )?;
            write!(
                f,
                r#"<line x1="0" y1="{y:.2}" x2="{w}" y2="{y:.2}" stroke="{}" stroke-width="{stroke:.2}"/>"#,
                self.palette.grid
            )?;
        }
        Ok(())
    }

    fn write_marks(&self, f: &mut fmt::Formatter<'_>, base_stroke: f64) -> fmt::Result {
        let cell_w = f64::from(self.width) / 3.0;
        let cell_h = f64::from(self.height) / 3.0;
        let pad = cell_w.min(cell_h) * MARK_PADDING;
        let stroke = base_stroke.max(MIN_MARK_STROKE);

        for (idx, &cell) in self.board.cells.iter().enumerate() {
            let left = (idx % 3) as f64 * cell_w;
            let top = (idx / 3) as f64 * cell_h;
            match cell {
                Cell::Empty => {}
                Cell::X => {
                    let (x1, x2) = (left + pad, left + cell_w - pad);
                    let (y1, y2) = (top + pad, top + cell_h - pad);
                    write!(
                        f,
                        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{stroke:.2}"/>"#,
                        self.palette.x_mark
                    )?;
                    write!(
                        f,
                        r#"<line x1="{x1:.2}" y1="{y2:.2}" x2="{x2:.2}" y2="{y1:.2}" stroke="{}" stroke-width="{stroke:.2}"/>"#,
                        self.palette.x_mark
                    )?;
                }
                Cell::O => {
                    let cx = left + cell_w / 2.0;
                    let cy = top + cell_h / 2.0;
                    write!(
                        f,
                        r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{pad:.2}" fill="none" stroke="{}" stroke-width="{stroke:.2}"/>"#,
                        self.palette.o_mark
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for BoardSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        let base_stroke = (f64::from(w) * STROKE_RATIO).max(MIN_BASE_STROKE);
        let radius = self.palette.corner_radius;

        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        write!(
            f,
            r#"<rect width="{w}" height="{h}" rx="{radius}" ry="{radius}" fill="{}"/>"#,
            self.palette.background
        )?;
        self.write_grid(f, base_stroke)?;
        self.write_marks(f, base_stroke)?;
        write!(f, "</svg>")
    }
}

/// Draw `board` as a self-contained SVG document of the given pixel size.
pub fn render_board_svg(
    board: &BoardState,
    width: u32,
    height: u32,
    palette: &BoardPalette,
) -> String {
    BoardSvg {
        board,
        width,
        height,
        palette,
    }
    .to_string()
}
