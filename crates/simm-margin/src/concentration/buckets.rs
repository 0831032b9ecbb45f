//! Bucket grouping tables.
//!
//! A grouping table assigns every legal bucket of a risk class to exactly one
//! group. Groups are tested in declaration order; a bucket matching none of
//! them is invalid input.

use simm_core::RiskClass;

use crate::error::{MarginError, MarginResult};

/// How a group recognises its member buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketMatch {
    /// Bucket identifier must equal one member exactly.
    Exact(&'static [&'static str]),
    /// Bucket identifier must equal one member ignoring ASCII case.
    IgnoreCase(&'static [&'static str]),
}

impl BucketMatch {
    /// Returns true if the bucket belongs to this set.
    #[must_use]
    pub fn contains(&self, bucket: &str) -> bool {
        match self {
            BucketMatch::Exact(members) => members.iter().any(|m| *m == bucket),
            BucketMatch::IgnoreCase(members) => {
                members.iter().any(|m| m.eq_ignore_ascii_case(bucket))
            }
        }
    }

    /// Returns the member identifiers.
    #[must_use]
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            BucketMatch::Exact(members) | BucketMatch::IgnoreCase(members) => members,
        }
    }
}

/// Ordered bucket-to-group classification for one risk class.
///
/// # Examples
///
/// ```
/// use simm_margin::concentration::{BucketGroups, BucketMatch};
/// use simm_core::RiskClass;
///
/// let groups = BucketGroups::new(RiskClass::CreditQualifying)
///     .group("low", BucketMatch::Exact(&["1", "2"]))
///     .group("other", BucketMatch::IgnoreCase(&["Residual"]));
///
/// assert_eq!(groups.classify("2").unwrap(), "low");
/// assert_eq!(groups.classify("RESIDUAL").unwrap(), "other");
/// assert!(groups.classify("3").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BucketGroups<G> {
    risk_class: RiskClass,
    groups: Vec<(G, BucketMatch)>,
}

impl<G: Copy> BucketGroups<G> {
    /// Creates an empty grouping for a risk class.
    #[must_use]
    pub fn new(risk_class: RiskClass) -> Self {
        Self {
            risk_class,
            groups: Vec::new(),
        }
    }

    /// Appends a group. Earlier groups take precedence.
    #[must_use]
    pub fn group(mut self, group: G, buckets: BucketMatch) -> Self {
        self.groups.push((group, buckets));
        self
    }

    /// Returns the risk class this grouping belongs to.
    #[must_use]
    pub fn risk_class(&self) -> RiskClass {
        self.risk_class
    }

    /// Classifies a bucket into its group.
    ///
    /// # Errors
    ///
    /// Returns [`MarginError::UnclassifiableBucket`] if no group contains the bucket.
    pub fn classify(&self, bucket: &str) -> MarginResult<G> {
        self.groups
            .iter()
            .find(|(_, members)| members.contains(bucket))
            .map(|(group, _)| *group)
            .ok_or_else(|| MarginError::unclassifiable(self.risk_class, bucket))
    }

    /// Iterates over the groups and their member sets in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (G, &BucketMatch)> {
        self.groups.iter().map(|(group, members)| (*group, members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_case_sensitive() {
        let m = BucketMatch::Exact(&["Residual"]);
        assert!(m.contains("Residual"));
        assert!(!m.contains("residual"));
    }

    #[test]
    fn test_ignore_case() {
        let m = BucketMatch::IgnoreCase(&["Residual"]);
        assert!(m.contains("residual"));
        assert!(m.contains("RESIDUAL"));
        assert!(!m.contains("Residua"));
    }

    #[test]
    fn test_first_group_wins() {
        let groups = BucketGroups::new(RiskClass::Equity)
            .group(1, BucketMatch::Exact(&["1", "2"]))
            .group(2, BucketMatch::Exact(&["2", "3"]));
        assert_eq!(groups.classify("2").unwrap(), 1);
        assert_eq!(groups.classify("3").unwrap(), 2);
        assert_eq!(groups.iter().count(), 2);
    }

    #[test]
    fn test_unclassifiable_carries_context() {
        let groups: BucketGroups<u8> = BucketGroups::new(RiskClass::Equity);
        assert_eq!(
            groups.classify("13").unwrap_err(),
            MarginError::unclassifiable(RiskClass::Equity, "13")
        );
    }
}
