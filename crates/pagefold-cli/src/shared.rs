use std::fs;
use std::path::Path;

use pagefold::PageLimits;

/// Read a text file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not
/// found or cannot be read.
pub fn read_text(file: &Path) -> Result<String, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Write a text file with user-friendly error messages.
pub fn write_text(file: &Path, contents: &str) -> Result<(), i32> {
    fs::write(file, contents).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", file.display());
        1
    })
}

/// Validate the two page bounds coming off the command line.
pub fn parse_limits(max_chars: usize, max_lines: usize) -> Result<PageLimits, i32> {
    PageLimits::new(max_chars, max_lines).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Percentage of `count` over `total`, 0.0 when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
