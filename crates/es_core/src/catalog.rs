//! Property name catalog loading.
//!
//! Names come from a plain text file, one per line. A missing or malformed
//! file is recovered transparently with deterministic placeholder names;
//! the values assigned to them are still randomized per match.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::board::BOARD_SIZE;

/// Reads the 20 property names from `path`.
///
/// Falls back to [`placeholder_names`] on any read failure, or when the file
/// does not hold exactly [`BOARD_SIZE`] lines. The fallback is logged but
/// never surfaced as an error.
pub fn load_property_names(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let names: Vec<String> = text.lines().map(str::to_string).collect();
            if names.len() == BOARD_SIZE {
                names
            } else {
                warn!(
                    path = %path.display(),
                    lines = names.len(),
                    expected = BOARD_SIZE,
                    "catalog has the wrong line count; using placeholder names"
                );
                placeholder_names()
            }
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                %err,
                "catalog unreadable; using placeholder names"
            );
            placeholder_names()
        }
    }
}

/// The deterministic fallback catalog: `"Placeholder 0".."Placeholder 19"`.
pub fn placeholder_names() -> Vec<String> {
    (0..BOARD_SIZE).map(|n| format!("Placeholder {n}")).collect()
}
