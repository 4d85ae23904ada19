//! Fetch collaborators for the statically hosted datasets.
//!
//! The board and aligners only ever see plain record vectors; everything
//! about retrieval (transport, URLs, cache busting) stays behind
//! [`SeriesSource`]. The blocking HTTP implementation lives in
//! `static_json` behind the `http-source` feature.

use tracing::warn;

use crate::core::records::{Entity, FinancialRecord};
use crate::error::TrendResult;

#[cfg(feature = "http-source")]
mod static_json;

#[cfg(feature = "http-source")]
pub use static_json::StaticJsonSource;

/// Retrieval seam over the hosted JSON files.
pub trait SeriesSource {
    /// The entities index used for series labels and colors.
    fn fetch_entities(&self) -> TrendResult<Vec<Entity>>;

    /// Per-entity EPS rows. Fails with `EntityNotFound` when the entity
    /// has no published dataset.
    fn fetch_eps_series(&self, entity_id: &str) -> TrendResult<Vec<FinancialRecord>>;

    /// Per-entity dividend rows. Same failure mode as the EPS series.
    fn fetch_dividend_series(&self, entity_id: &str) -> TrendResult<Vec<FinancialRecord>>;
}

/// One entity's settled fetch within a multi-entity refresh.
#[derive(Debug)]
pub struct EntityFetchOutcome {
    pub entity_id: String,
    pub result: TrendResult<Vec<FinancialRecord>>,
}

impl EntityFetchOutcome {
    #[must_use]
    pub fn new(entity_id: impl Into<String>, result: TrendResult<Vec<FinancialRecord>>) -> Self {
        Self {
            entity_id: entity_id.into(),
            result,
        }
    }
}

/// Fetches one series per entity, settling each independently.
///
/// A failing entity is carried as its own outcome so the surviving
/// entities still render; nothing in the batch aborts it.
pub fn fetch_entity_batch<S, F>(source: &S, entity_ids: &[String], fetch: F) -> Vec<EntityFetchOutcome>
where
    S: SeriesSource,
    F: Fn(&S, &str) -> TrendResult<Vec<FinancialRecord>>,
{
    entity_ids
        .iter()
        .map(|entity_id| {
            let result = fetch(source, entity_id);
            if let Err(err) = &result {
                warn!(entity_id = %entity_id, error = %err, "entity fetch failed");
            }
            EntityFetchOutcome::new(entity_id.clone(), result)
        })
        .collect()
}
