//! Blocker flag filter.

use super::FilterError;
use crate::bugs::BlockerFlag;

/// Admits bugs whose blocker flag is one of the requested values.
///
/// An empty filter admits every flag, including "no flag".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockerFilter {
    values: Vec<Option<BlockerFlag>>,
}

impl BlockerFilter {
    /// Creates a filter from already parsed values.
    #[must_use]
    pub fn new(values: Vec<Option<BlockerFlag>>) -> Self {
        Self { values }
    }

    /// Parses command-line values such as `+`, `blocker-`, `?` or `none`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidBlocker`] for an unrecognised value.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Self, FilterError> {
        values
            .iter()
            .map(|value| parse_value(value.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Returns true if a bug with `flag` passes the filter.
    #[must_use]
    pub fn admits(&self, flag: Option<BlockerFlag>) -> bool {
        self.values.is_empty() || self.values.contains(&flag)
    }
}

fn parse_value(value: &str) -> Result<Option<BlockerFlag>, FilterError> {
    let trimmed = value.trim();
    match trimmed {
        "" | "none" => Ok(None),
        "+" => Ok(Some(BlockerFlag::Approved)),
        "-" => Ok(Some(BlockerFlag::Rejected)),
        "?" => Ok(Some(BlockerFlag::Proposed)),
        other => BlockerFlag::from_jira(other)
            .map(Some)
            .ok_or_else(|| FilterError::InvalidBlocker(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_admits_everything() {
        let filter = BlockerFilter::default();

        assert!(filter.admits(None));
        for flag in BlockerFlag::ALL {
            assert!(filter.admits(Some(flag)));
        }
    }

    #[test]
    fn parses_short_and_long_spellings() {
        let filter = BlockerFilter::parse(&["+", "blocker?", "none"]).unwrap();

        assert!(filter.admits(Some(BlockerFlag::Approved)));
        assert!(filter.admits(Some(BlockerFlag::Proposed)));
        assert!(filter.admits(None));
        assert!(!filter.admits(Some(BlockerFlag::Rejected)));
    }

    #[test]
    fn requested_flag_must_match_exactly() {
        let filter = BlockerFilter::parse(&["-"]).unwrap();

        assert!(filter.admits(Some(BlockerFlag::Rejected)));
        assert!(!filter.admits(None));
    }

    #[test]
    fn rejects_unknown_value() {
        let err = BlockerFilter::parse(&["maybe"]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBlocker(v) if v == "maybe"));
    }
}
