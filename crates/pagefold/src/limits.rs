//! Page bounds shared by the paginator and the verifier.

use std::fmt;

/// Bounds applied to every rendered page.
///
/// Both limits are in characters/lines and must be at least 1; use
/// [`PageLimits::new`] to construct a validated pair. Width is measured in
/// Unicode scalar values (`char` count), never bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLimits {
    /// Maximum characters per rendered line.
    pub max_chars: usize,
    /// Maximum content lines per page.
    pub max_lines: usize,
}

impl PageLimits {
    /// Create a validated pair of limits.
    ///
    /// Returns an error if either limit is zero.
    pub fn new(max_chars: usize, max_lines: usize) -> Result<Self, LimitsError> {
        if max_chars == 0 {
            return Err(LimitsError::ZeroMaxChars);
        }
        if max_lines == 0 {
            return Err(LimitsError::ZeroMaxLines);
        }
        Ok(Self {
            max_chars,
            max_lines,
        })
    }
}

/// Rejected page-limit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitsError {
    /// `max_chars` was zero.
    ZeroMaxChars,
    /// `max_lines` was zero.
    ZeroMaxLines,
}

impl fmt::Display for LimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitsError::ZeroMaxChars => write!(f, "max-chars must be at least 1"),
            LimitsError::ZeroMaxLines => write!(f, "max-lines must be at least 1"),
        }
    }
}

impl std::error::Error for LimitsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_limits() {
        let limits = PageLimits::new(80, 25).unwrap();
        assert_eq!(limits.max_chars, 80);
        assert_eq!(limits.max_lines, 25);
    }

    #[test]
    fn new_accepts_one_by_one() {
        assert!(PageLimits::new(1, 1).is_ok());
    }

    #[test]
    fn new_rejects_zero_max_chars() {
        assert_eq!(PageLimits::new(0, 25), Err(LimitsError::ZeroMaxChars));
    }

    #[test]
    fn new_rejects_zero_max_lines() {
        assert_eq!(PageLimits::new(80, 0), Err(LimitsError::ZeroMaxLines));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            LimitsError::ZeroMaxChars.to_string(),
            "max-chars must be at least 1"
        );
        assert_eq!(
            LimitsError::ZeroMaxLines.to_string(),
            "max-lines must be at least 1"
        );
    }
}
