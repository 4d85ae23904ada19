use tracing::debug;

use crate::core::aligned::{AlignedSeries, AlignedSeriesSet};
use crate::core::calendar::{YearWindow, month_label, year_label};
use crate::core::join::{first_by_key, join_by_key, sorted_unique_months};
use crate::core::records::FinancialRecord;

/// Year-over-year monthly EPS alignment.
///
/// The category axis is the union of the distinct months reported by any
/// window year, ascending and zero-padded. Each window year becomes one
/// series in chronological order, its `eps_month` values outer-joined onto
/// the axis by month key so that a year with fewer reported months shows
/// gaps instead of a shifted row.
#[must_use]
pub fn align_monthly_yoy(records: &[FinancialRecord], window: YearWindow) -> AlignedSeriesSet {
    if records.is_empty() {
        return AlignedSeriesSet::empty();
    }

    let months = sorted_unique_months(
        records
            .iter()
            .filter(|record| window.contains(record.year))
            .map(|record| record.month),
    );

    let series = window
        .years()
        .map(|year| {
            let by_month = first_by_key(
                records
                    .iter()
                    .filter(|record| record.year == year)
                    .map(|record| (record.month, record.eps_month)),
            );
            AlignedSeries::new(year_label(year), join_by_key(&months, &by_month))
        })
        .collect::<Vec<_>>();

    debug!(
        record_count = records.len(),
        month_count = months.len(),
        year_count = series.len(),
        "aligned monthly yoy eps"
    );

    AlignedSeriesSet {
        categories: months.iter().map(|&month| month_label(month)).collect(),
        series,
    }
}
