use serde::{Deserialize, Serialize};

/// One legend entry: a label and its value row.
///
/// `values` is positionally aligned with the owning set's category axis.
/// A missing data point is `None` at its category position, never omitted,
/// so every row keeps the axis length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl AlignedSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Ready-to-plot output of an aligner: a shared category axis plus one
/// value row per legend entry.
///
/// Categories are deduplicated and sorted ascending by their underlying
/// numeric key before any value row is joined, never after.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeriesSet {
    pub categories: Vec<String>,
    pub series: Vec<AlignedSeries>,
}

impl AlignedSeriesSet {
    /// The empty-input result: no axis, no legend entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.series.is_empty()
    }

    /// True when every value row matches the axis length.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.series
            .iter()
            .all(|series| series.values.len() == self.categories.len())
    }

    #[must_use]
    pub fn series_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}
