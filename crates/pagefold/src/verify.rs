//! Independent re-check of paginated text against its page bounds.
//!
//! The verifier shares no state with the paginator; it re-derives page and
//! line boundaries from the literal marker convention and reports every
//! breach of the two bounds. A failed check is a normal outcome, not an
//! error.

use std::fmt;

use crate::limits::PageLimits;
use crate::marker;

/// A recorded breach of one of the page bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Violation {
    /// A page accumulated more content lines than `max_lines`.
    PageTooLong {
        /// 1-based page number.
        page: usize,
        /// Content lines counted on the page.
        lines: usize,
    },
    /// A content line is wider than `max_chars`.
    LineTooWide {
        /// 1-based page number.
        page: usize,
        /// 1-based line index within the page.
        line: usize,
        /// Observed width in characters.
        width: usize,
    },
}

impl Violation {
    /// The page the violation was recorded against.
    pub fn page(&self) -> usize {
        match self {
            Violation::PageTooLong { page, .. } => *page,
            Violation::LineTooWide { page, .. } => *page,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PageTooLong { page, .. } => {
                write!(f, "Page {page}: Exceeded maxLines.")
            }
            Violation::LineTooWide { page, line, .. } => {
                write!(f, "Page {page}, Line {line}: Exceeded maxChars.")
            }
        }
    }
}

/// Outcome of re-checking paginated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Every breach found, in scan order.
    pub violations: Vec<Violation>,
}

impl VerifyReport {
    /// Returns `true` iff no violations were recorded.
    pub fn is_met(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Scan `paged` text and report every line or page that breaks `limits`.
///
/// Blank lines are ignored and never count toward a page's line total. A
/// line starting with `Page ` closes the page being accumulated; the page
/// counter advances on every marker. A trailing page with no closing
/// marker is checked like any other.
pub fn verify(paged: &str, limits: PageLimits) -> VerifyReport {
    let mut violations = Vec::new();
    let mut page = 1usize;
    let mut lines_on_page = 0usize;
    let mut in_page = false;

    for line in paged.lines() {
        if line.is_empty() {
            continue;
        }

        if marker::is_marker(line) {
            if in_page {
                if lines_on_page > limits.max_lines {
                    violations.push(Violation::PageTooLong {
                        page,
                        lines: lines_on_page,
                    });
                }
                in_page = false;
                lines_on_page = 0;
            }
            page += 1;
            continue;
        }

        in_page = true;
        lines_on_page += 1;

        let width = line.chars().count();
        if width > limits.max_chars {
            violations.push(Violation::LineTooWide {
                page,
                line: lines_on_page,
                width,
            });
        }
    }

    if in_page && lines_on_page > limits.max_lines {
        violations.push(Violation::PageTooLong {
            page,
            lines: lines_on_page,
        });
    }

    VerifyReport { violations }
}
