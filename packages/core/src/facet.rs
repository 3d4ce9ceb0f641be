//! Filter dimensions and the "no constraint" sentinel.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised when turning an option label back into a facet value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    #[error("empty option label")]
    Empty,
    #[error("unknown {facet} option: {label}")]
    Unknown { facet: &'static str, label: String },
}

/// A filterable job dimension (region, shift, contract, tag).
///
/// Each dimension carries the label shown for its sentinel option.
pub trait Facet: Clone + PartialEq + fmt::Display + FromStr<Err = FacetError> {
    const ANY_LABEL: &'static str;
}

/// One filter choice: either the sentinel or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    Any,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T> Choice<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }

    /// Sentinel accepts everything, otherwise defer to `pred`.
    pub fn admits(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(value) => pred(value),
        }
    }
}

impl<T: Facet> Choice<T> {
    /// Parse an option label produced by [`Choice`]'s `Display`.
    pub fn parse(label: &str) -> Result<Self, FacetError> {
        if label == T::ANY_LABEL {
            return Ok(Choice::Any);
        }
        label.parse().map(Choice::Only)
    }
}

impl<T: Facet> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Any => f.write_str(T::ANY_LABEL),
            Choice::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use crate::{Contract, Region, Shift, Tag};

    #[test]
    fn sentinel_labels() {
        assert_eq!(Choice::<Region>::Any.to_string(), "All regions");
        assert_eq!(Choice::<Shift>::Any.to_string(), "Any shift");
        assert_eq!(Choice::<Contract>::Any.to_string(), "All contracts");
        assert_eq!(Choice::<Tag>::Any.to_string(), "Any specialty");
    }

    #[test]
    fn parse_inverts_display() -> Result<(), FacetError> {
        assert_eq!(Choice::<Shift>::parse("Any shift")?, Choice::Any);
        assert_eq!(Choice::<Shift>::parse("Night")?, Choice::Only(Shift::Night));
        assert_eq!(
            Choice::<Region>::parse("Oslo")?,
            Choice::Only(Region::new("Oslo"))
        );
        assert_eq!(
            Choice::<Contract>::parse("Full-time")?.to_string(),
            "Full-time"
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_bad_labels() {
        assert_eq!(Choice::<Tag>::parse(""), Err(FacetError::Empty));
        assert!(matches!(
            Choice::<Contract>::parse("Gig"),
            Err(FacetError::Unknown { facet: "contract", .. })
        ));
    }
}
