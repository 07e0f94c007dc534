//! Interactive depth prompt

use dialoguer::Input;

use crate::{
    Error, Result,
    config::{DEPTH_CAP, DEPTH_MIN, validate_depth},
};

/// Ask for a tree depth on the terminal until a value in range is entered.
///
/// Non-numeric input and out-of-range numbers are rejected and the question
/// is asked again.
pub fn prompt_for_depth() -> Result<usize> {
    println!("Select depth of Tic-Tac-Toe game tree");
    println!("(Recommended: 2-4. Maximum allowed: {DEPTH_CAP})\n");

    let depth = Input::<usize>::new()
        .with_prompt(format!("Enter tree depth ({DEPTH_MIN}-{DEPTH_CAP})"))
        .validate_with(|input: &usize| -> std::result::Result<(), String> {
            validate_depth(*input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| Error::Prompt {
            message: e.to_string(),
        })?;

    Ok(depth)
}
