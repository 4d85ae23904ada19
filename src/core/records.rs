use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Month number used by year-level records carrying annual figures.
pub const YEAR_END_MONTH: u32 = 12;

/// One raw row of a per-entity dataset.
///
/// EPS files carry one row per reported month (`eps_month` for the period
/// contribution, `eps` for the cumulative figure as of that month).
/// Dividend files carry one row per year with `month == YEAR_END_MONTH`.
/// Numeric fields are nullable: a future or unreported period is a gap,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    #[serde(default)]
    pub entity_id: String,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub eps_month: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub dividend_cash: Option<f64>,
    #[serde(default)]
    pub dividend_stock: Option<f64>,
}

impl FinancialRecord {
    #[must_use]
    pub fn is_year_end(&self) -> bool {
        self.month == YEAR_END_MONTH
    }
}

/// Metadata entry from the entities index file.
///
/// Required only to label series; alignment never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Keyed lookup over the entities index, preserving file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityDirectory {
    entries: IndexMap<String, Entity>,
}

impl EntityDirectory {
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        let mut entries = IndexMap::with_capacity(entities.len());
        for entity in entities {
            entries.insert(entity.id.clone(), entity);
        }
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<&Entity> {
        self.entries.get(entity_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entries.values()
    }

    /// Legend label for a series: `"{id} {name}"`.
    ///
    /// An entity missing from the index degrades to its bare id; labeling
    /// never fails.
    #[must_use]
    pub fn legend_label(&self, entity_id: &str) -> String {
        let name = self
            .entries
            .get(entity_id)
            .map(|entity| entity.name.as_str())
            .unwrap_or_default();
        format!("{entity_id} {name}").trim_end().to_owned()
    }

    /// Display color hint for a series, when the index provides one.
    #[must_use]
    pub fn color(&self, entity_id: &str) -> Option<&str> {
        self.entries
            .get(entity_id)
            .and_then(|entity| entity.color.as_deref())
    }
}
