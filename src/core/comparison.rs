use tracing::debug;

use crate::core::aligned::{AlignedSeries, AlignedSeriesSet};
use crate::core::calendar::{month_label, year_label};
use crate::core::dividends::latest_cumulative_eps;
use crate::core::join::{first_by_key, join_by_key, sorted_unique_months, sorted_unique_years};
use crate::core::records::{EntityDirectory, FinancialRecord};

/// One selected entity's raw records, in selection order.
#[derive(Debug, Clone, Copy)]
pub struct EntityRecords<'a> {
    pub entity_id: &'a str,
    pub records: &'a [FinancialRecord],
}

impl<'a> EntityRecords<'a> {
    #[must_use]
    pub fn new(entity_id: &'a str, records: &'a [FinancialRecord]) -> Self {
        Self { entity_id, records }
    }
}

/// Monthly EPS comparison across entities for one target year.
///
/// The axis is the union of the months any selected entity reported for
/// the target year; each entity's `eps_month` values are outer-joined onto
/// it by month key, so an entity missing a month shows a gap at that
/// position instead of a shifted row. Legend labels come from the entity
/// directory and degrade to the bare id for unknown entities.
#[must_use]
pub fn align_monthly_comparison(
    selection: &[EntityRecords<'_>],
    target_year: i32,
    directory: &EntityDirectory,
) -> AlignedSeriesSet {
    if selection.is_empty() {
        return AlignedSeriesSet::empty();
    }

    let months = sorted_unique_months(
        selection
            .iter()
            .flat_map(|entity| entity.records.iter())
            .filter(|record| record.year == target_year)
            .map(|record| record.month),
    );

    let series = selection
        .iter()
        .map(|entity| {
            let by_month = first_by_key(
                entity
                    .records
                    .iter()
                    .filter(|record| record.year == target_year)
                    .map(|record| (record.month, record.eps_month)),
            );
            AlignedSeries::new(
                directory.legend_label(entity.entity_id),
                join_by_key(&months, &by_month),
            )
        })
        .collect::<Vec<_>>();

    debug!(
        entity_count = selection.len(),
        target_year,
        month_count = months.len(),
        "aligned monthly comparison"
    );

    AlignedSeriesSet {
        categories: months.iter().map(|&month| month_label(month)).collect(),
        series,
    }
}

/// Yearly EPS comparison across entities over an explicit year set.
///
/// The axis is the requested year set, deduplicated and ascending. Every
/// non-current year takes the entity's year-end cumulative EPS; the
/// current year, when requested, takes the latest reported non-null
/// cumulative figure and sits at its sorted axis position.
#[must_use]
pub fn align_yearly_comparison(
    selection: &[EntityRecords<'_>],
    years: &[i32],
    current_year: i32,
    directory: &EntityDirectory,
) -> AlignedSeriesSet {
    if selection.is_empty() {
        return AlignedSeriesSet::empty();
    }

    let years = sorted_unique_years(years.iter().copied());

    let series = selection
        .iter()
        .map(|entity| {
            let year_end_eps = first_by_key(
                entity
                    .records
                    .iter()
                    .filter(|record| record.is_year_end() && record.year != current_year)
                    .map(|record| (record.year, record.eps)),
            );
            let values = years
                .iter()
                .map(|&year| {
                    if year == current_year {
                        latest_cumulative_eps(entity.records, year)
                    } else {
                        year_end_eps.get(&year).copied().flatten()
                    }
                })
                .collect();
            AlignedSeries::new(directory.legend_label(entity.entity_id), values)
        })
        .collect::<Vec<_>>();

    debug!(
        entity_count = selection.len(),
        year_count = years.len(),
        "aligned yearly comparison"
    );

    AlignedSeriesSet {
        categories: years.iter().map(|&year| year_label(year)).collect(),
        series,
    }
}
