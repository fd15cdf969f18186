//! Major-category display ordering.

use serde::{Deserialize, Serialize};

/// An ordered sequence of major-category labels supplied by the caller.
///
/// Categories present in the entries but absent from this sequence are
/// appended after the configured ones, in first-seen order. The order
/// affects only iteration and display, never the arithmetic results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOrder(Vec<String>);

impl CategoryOrder {
    /// Creates an empty order (all categories appear in first-seen order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an order from a list of category labels.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Returns the configured labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns true if the label is part of the configured order.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Returns the number of configured labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no labels are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order() {
        let order = CategoryOrder::new();
        assert!(order.is_empty());
        assert!(!order.contains("Equity"));
    }

    #[test]
    fn test_from_labels() {
        let order = CategoryOrder::from_labels(["Equity", "Bond"]);
        assert_eq!(order.len(), 2);
        assert!(order.contains("Equity"));
        assert!(order.contains("Bond"));
        assert!(!order.contains("Cash"));
        let labels: Vec<_> = order.iter().collect();
        assert_eq!(labels, vec!["Equity", "Bond"]);
    }

    #[test]
    fn test_from_iterator() {
        let order: CategoryOrder = vec!["Cash", "Commodity"].into_iter().collect();
        assert_eq!(order.iter().next(), Some("Cash"));
    }
}
