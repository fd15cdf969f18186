//! Ordered grouping of entries by major and minor category.
//!
//! Grouping preserves the caller-supplied category order and the original
//! relative order of entries inside each bucket, which is why groups are
//! returned as ordered vectors rather than a map. The order affects only
//! iteration and display, never the arithmetic results.

use rust_decimal::Decimal;

use rebalance_core::{CategoryOrder, FundEntry};

/// One major-category bucket of entries.
#[derive(Debug, Clone)]
pub struct MajorGroup<'a> {
    /// The major-category label.
    pub label: String,

    /// Entries in this bucket, in original relative order.
    pub entries: Vec<&'a FundEntry>,
}

impl MajorGroup<'_> {
    /// Sum of the current amounts in this bucket.
    #[must_use]
    pub fn current_amount(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Sum of the target ratios in this bucket.
    #[must_use]
    pub fn target_ratio_sum(&self) -> Decimal {
        self.entries.iter().map(|e| e.target_ratio).sum()
    }
}

/// One minor-category bucket within a major category.
///
/// `label` is `None` for entries without a minor category (the
/// unclassified bucket).
#[derive(Debug, Clone)]
pub struct MinorGroup<'a> {
    /// The minor-category label, or `None` when unclassified.
    pub label: Option<String>,

    /// Entries in this bucket, in original relative order.
    pub entries: Vec<&'a FundEntry>,
}

impl MinorGroup<'_> {
    /// Sum of the current amounts in this bucket.
    #[must_use]
    pub fn current_amount(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Sum of the target ratios in this bucket.
    #[must_use]
    pub fn target_ratio_sum(&self) -> Decimal {
        self.entries.iter().map(|e| e.target_ratio).sum()
    }
}

/// Groups entries by major category.
///
/// Bucket order follows `order` first (only categories actually present),
/// then any categories not in `order` in first-encountered order.
#[must_use]
pub fn group_by_major_category<'a>(
    entries: &'a [FundEntry],
    order: &CategoryOrder,
) -> Vec<MajorGroup<'a>> {
    let mut groups: Vec<MajorGroup<'a>> = Vec::new();

    for label in order.iter() {
        // A label repeated in the order must still yield one bucket.
        if groups.iter().any(|g| g.label == label) {
            continue;
        }
        let bucket: Vec<&FundEntry> = entries
            .iter()
            .filter(|e| e.major_category == label)
            .collect();
        if !bucket.is_empty() {
            groups.push(MajorGroup {
                label: label.to_string(),
                entries: bucket,
            });
        }
    }

    for entry in entries {
        if order.contains(&entry.major_category) {
            continue;
        }
        match groups
            .iter_mut()
            .find(|g| g.label == entry.major_category)
        {
            Some(group) => group.entries.push(entry),
            None => groups.push(MajorGroup {
                label: entry.major_category.clone(),
                entries: vec![entry],
            }),
        }
    }

    groups
}

/// Groups the entries of one major-category bucket by minor category.
///
/// Buckets appear in first-seen label order; entries without a minor
/// category share a single unclassified bucket (`label == None`). Minor
/// grouping feeds display subtotals only, never the cash-flow math.
#[must_use]
pub fn group_by_minor_category<'a>(entries: &[&'a FundEntry]) -> Vec<MinorGroup<'a>> {
    let mut groups: Vec<MinorGroup<'a>> = Vec::new();

    for entry in entries {
        let label = entry.minor_label();
        match groups
            .iter_mut()
            .find(|g| g.label.as_deref() == label)
        {
            Some(group) => group.entries.push(entry),
            None => groups.push(MinorGroup {
                label: label.map(String::from),
                entries: vec![entry],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(id: &str, major: &str, minor: Option<&str>, amount: Decimal) -> FundEntry {
        let mut builder = FundEntry::builder()
            .id(id)
            .major_category(major)
            .target_ratio(dec!(0.1))
            .amount(amount);
        if let Some(minor) = minor {
            builder = builder.minor_category(minor);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_configured_order_respected() {
        let entries = vec![
            entry("1", "Bond", None, dec!(100)),
            entry("2", "Equity", None, dec!(200)),
            entry("3", "Bond", None, dec!(300)),
        ];
        let order = CategoryOrder::from_labels(["Equity", "Bond"]);

        let groups = group_by_major_category(&entries, &order);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Equity");
        assert_eq!(groups[1].label, "Bond");
        // intra-bucket original order
        assert_eq!(groups[1].entries[0].id, "1");
        assert_eq!(groups[1].entries[1].id, "3");
        assert_eq!(groups[1].current_amount(), dec!(400));
    }

    #[test]
    fn test_unconfigured_categories_appended_first_seen() {
        let entries = vec![
            entry("1", "Cash", None, dec!(50)),
            entry("2", "Equity", None, dec!(100)),
            entry("3", "Commodity", None, dec!(75)),
        ];
        let order = CategoryOrder::from_labels(["Equity"]);

        let groups = group_by_major_category(&entries, &order);

        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Equity", "Cash", "Commodity"]);
    }

    #[test]
    fn test_empty_order_uses_first_seen() {
        let entries = vec![
            entry("1", "Bond", None, dec!(1)),
            entry("2", "Equity", None, dec!(1)),
            entry("3", "Bond", None, dec!(1)),
        ];
        let groups = group_by_major_category(&entries, &CategoryOrder::new());

        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Bond", "Equity"]);
    }

    #[test]
    fn test_duplicate_order_labels_yield_one_group() {
        let entries = vec![
            entry("1", "Equity", None, dec!(100)),
            entry("2", "Bond", None, dec!(200)),
        ];
        let order = CategoryOrder::from_labels(["Equity", "Equity", "Bond"]);

        let groups = group_by_major_category(&entries, &order);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Equity");
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[1].label, "Bond");
    }

    #[test]
    fn test_order_with_absent_category() {
        let entries = vec![entry("1", "Equity", None, dec!(1))];
        let order = CategoryOrder::from_labels(["Gold", "Equity"]);

        let groups = group_by_major_category(&entries, &order);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Equity");
    }

    #[test]
    fn test_minor_grouping() {
        let entries = vec![
            entry("1", "Equity", Some("US"), dec!(100)),
            entry("2", "Equity", None, dec!(200)),
            entry("3", "Equity", Some("US"), dec!(300)),
            entry("4", "Equity", Some("EU"), dec!(400)),
        ];
        let refs: Vec<&FundEntry> = entries.iter().collect();

        let groups = group_by_minor_category(&refs);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label.as_deref(), Some("US"));
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].current_amount(), dec!(400));
        assert_eq!(groups[1].label, None);
        assert_eq!(groups[2].label.as_deref(), Some("EU"));
    }

    #[test]
    fn test_empty_entries() {
        let groups = group_by_major_category(&[], &CategoryOrder::from_labels(["Equity"]));
        assert!(groups.is_empty());
        assert!(group_by_minor_category(&[]).is_empty());
    }
}
