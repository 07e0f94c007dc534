//! Subcommands of the `ttt-tree` binary

pub mod generate;
pub mod inspect;
pub mod stats;

use crate::config::validate_depth;

/// clap value parser for depth arguments
pub(crate) fn parse_depth(input: &str) -> Result<usize, String> {
    let depth: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("'{input}' is not a whole number"))?;
    validate_depth(depth).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_depth_accepts_range() {
        assert_eq!(parse_depth("3"), Ok(3));
        assert_eq!(parse_depth(" 5 "), Ok(5));
    }

    #[test]
    fn parse_depth_rejects_garbage_and_out_of_range() {
        assert!(parse_depth("three").is_err());
        assert!(parse_depth("0").is_err());
        assert!(parse_depth("6").is_err());
        assert!(parse_depth("-1").is_err());
    }
}
