//! pagefold: reflow plain text into fixed-width, fixed-height pages.
//!
//! The [`paginate`] half packs whitespace-delimited words greedily into
//! lines of at most `max_chars` characters and pages of at most
//! `max_lines` lines, tallying word frequencies along the way. The
//! [`verify`] half independently re-parses paginated text and reports
//! every breach of the same two bounds. The two halves meet only at the
//! textual page-marker convention owned by [`marker`].
//!
//! All functionality is pure and synchronous; file I/O and reporting live
//! in the `pagefold-cli` crate.

pub mod frequency;
pub mod limits;
pub mod marker;
pub mod paginate;
pub mod verify;

pub use frequency::{FrequencyTable, WordCount};
pub use limits::{LimitsError, PageLimits};
pub use paginate::{Pagination, paginate};
pub use verify::{VerifyReport, Violation, verify};
