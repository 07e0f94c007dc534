//! Configuration for tree generation and rendering

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, export::ExportFormat, render::BoardPalette};

/// Hard ceiling on the tree depth. Deeper trees blow up the rendered page.
pub const DEPTH_CAP: usize = 5;

/// Smallest depth the depth prompt accepts
pub const DEPTH_MIN: usize = 1;

/// Pixel dimensions of one rendered board image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSize {
    pub width: u32,
    pub height: u32,
}

impl RenderSize {
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Image sizes and colours used for every node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Icon drawn on the graph node
    pub icon: RenderSize,
    /// Preview shown in the details panel
    pub preview: RenderSize,
    pub palette: BoardPalette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            icon: RenderSize::square(96),
            preview: RenderSize::square(260),
            palette: BoardPalette::default(),
        }
    }
}

/// Full configuration of a `generate` run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Number of levels in the tree, root included
    pub max_depth: usize,
    pub render: RenderConfig,
    /// Destination of the generated artifact
    pub output: PathBuf,
    pub format: ExportFormat,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            render: RenderConfig::default(),
            output: PathBuf::from("ttt_tree_interactive.html"),
            format: ExportFormat::Html,
        }
    }
}

impl TreeConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: TreeConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject render sizes that would produce empty images.
    pub fn validate(&self) -> Result<()> {
        for (name, size) in [("icon", self.render.icon), ("preview", self.render.preview)] {
            if size.width == 0 || size.height == 0 {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "{name} size must be non-zero, got {}x{}",
                        size.width, size.height
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Check a depth supplied by a user against `DEPTH_MIN..=DEPTH_CAP`.
pub fn validate_depth(depth: usize) -> Result<usize> {
    if (DEPTH_MIN..=DEPTH_CAP).contains(&depth) {
        Ok(depth)
    } else {
        Err(Error::DepthOutOfRange {
            depth,
            min: DEPTH_MIN,
            max: DEPTH_CAP,
        })
    }
}

/// Apply the hard depth ceiling.
pub fn clamp_depth(depth: usize) -> usize {
    depth.min(DEPTH_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_generated_page() {
        let config = TreeConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.render.icon, RenderSize::square(96));
        assert_eq!(config.render.preview, RenderSize::square(260));
        assert_eq!(config.format, ExportFormat::Html);
    }

    #[test]
    fn validate_depth_accepts_one_through_five() {
        for depth in 1..=5 {
            assert_eq!(validate_depth(depth).unwrap(), depth);
        }
        assert!(matches!(
            validate_depth(0),
            Err(Error::DepthOutOfRange { depth: 0, .. })
        ));
        assert!(validate_depth(6).is_err());
    }

    #[test]
    fn clamp_depth_caps_at_five() {
        assert_eq!(clamp_depth(2), 2);
        assert_eq!(clamp_depth(5), 5);
        assert_eq!(clamp_depth(40), DEPTH_CAP);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{"max_depth": 4, "render": {"icon": {"width": 64, "height": 64}}}"#;
        let config: TreeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.render.icon, RenderSize::square(64));
        assert_eq!(config.render.preview, RenderSize::square(260));
        assert_eq!(config.output, PathBuf::from("ttt_tree_interactive.html"));
    }

    #[test]
    fn zero_sized_render_is_rejected() {
        let mut config = TreeConfig::default();
        config.render.preview = RenderSize::square(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, r#"{"max_depth": 2, "format": "dot"}"#).unwrap();

        let config = TreeConfig::from_json_file(&path).unwrap();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.format, ExportFormat::Dot);
    }
}
