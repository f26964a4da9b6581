use std::path::Path;

use pagefold::{Violation, verify};

use crate::cli::ReportFormat;
use crate::shared::{parse_limits, read_text};

pub fn run(
    file: &Path,
    max_chars: usize,
    max_lines: usize,
    format: &ReportFormat,
) -> Result<(), i32> {
    let limits = parse_limits(max_chars, max_lines)?;
    let paged = read_text(file)?;

    let report = verify(&paged, limits);

    match format {
        ReportFormat::Text => {
            if report.is_met() {
                println!("MaxChars and MaxLines conditions met for all pages.");
            } else {
                println!("Conditions not met. Violations:");
                for violation in &report.violations {
                    println!("{violation}");
                }
            }
        }
        ReportFormat::Json => {
            let violations: Vec<serde_json::Value> = report
                .violations
                .iter()
                .map(|violation| match violation {
                    Violation::PageTooLong { page, lines } => serde_json::json!({
                        "kind": "page_too_long",
                        "page": page,
                        "lines": lines,
                    }),
                    Violation::LineTooWide { page, line, width } => serde_json::json!({
                        "kind": "line_too_wide",
                        "page": page,
                        "line": line,
                        "width": width,
                    }),
                })
                .collect();

            let output = serde_json::json!({
                "ok": report.is_met(),
                "violations": violations,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }

    if report.is_met() { Ok(()) } else { Err(1) }
}
