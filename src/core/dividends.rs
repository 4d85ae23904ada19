use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::aligned::{AlignedSeries, AlignedSeriesSet};
use crate::core::calendar::{YearWindow, year_label};
use crate::core::join::{first_by_key, join_by_key, sorted_unique_years};
use crate::core::records::FinancialRecord;

pub const EPS_SERIES_LABEL: &str = "EPS";
pub const CASH_DIVIDEND_SERIES_LABEL: &str = "Cash Dividend";
pub const STOCK_DIVIDEND_SERIES_LABEL: &str = "Stock Dividend";

/// EPS-vs-dividends view: the aligned set plus the per-category payout
/// ratio annotations rendered on the EPS bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpsDividendsView {
    pub set: AlignedSeriesSet,
    /// Rounded percentage per category, aligned 1:1 with the axis.
    pub payout_ratios: Vec<i64>,
}

impl EpsDividendsView {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.set.is_aligned() && self.payout_ratios.len() == self.set.categories.len()
    }
}

/// Payout ratio as the chart annotates it: `(cash + stock) / eps` in whole
/// percent, with a hard zero when EPS is zero.
#[must_use]
pub fn payout_ratio(eps: f64, cash: f64, stock: f64) -> i64 {
    if eps == 0.0 {
        return 0;
    }
    (((cash + stock) / eps) * 100.0).round() as i64
}

/// Aligns year-end EPS against declared dividends over a trailing window.
///
/// The axis is every window year holding a year-end EPS record. Historical
/// years take the year-end cumulative figure; the current in-progress year
/// takes its latest reported non-null cumulative EPS (highest month wins),
/// or a gap when nothing has been reported yet. Dividend rows are looked
/// up per axis year and are gaps for years with no declaration on file.
#[must_use]
pub fn align_eps_vs_dividends(
    eps_records: &[FinancialRecord],
    dividend_records: &[FinancialRecord],
    window: YearWindow,
) -> EpsDividendsView {
    if eps_records.is_empty() {
        return EpsDividendsView::empty();
    }

    let years = sorted_unique_years(
        eps_records
            .iter()
            .filter(|record| record.is_year_end() && record.year >= window.start_year())
            .map(|record| record.year),
    );

    let year_end_eps = first_by_key(
        eps_records
            .iter()
            .filter(|record| record.is_year_end() && record.year < window.current_year)
            .map(|record| (record.year, record.eps)),
    );
    let eps_values: Vec<Option<f64>> = years
        .iter()
        .map(|&year| {
            if year == window.current_year {
                latest_cumulative_eps(eps_records, year)
            } else {
                year_end_eps.get(&year).copied().flatten()
            }
        })
        .collect();

    let cash_lookup = first_by_key(
        dividend_records
            .iter()
            .map(|record| (record.year, record.dividend_cash)),
    );
    let stock_lookup = first_by_key(
        dividend_records
            .iter()
            .map(|record| (record.year, record.dividend_stock)),
    );
    let cash_values = join_by_key(&years, &cash_lookup);
    let stock_values = join_by_key(&years, &stock_lookup);

    let payout_ratios = eps_values
        .iter()
        .zip(cash_values.iter().zip(stock_values.iter()))
        .map(|(eps, (cash, stock))| {
            payout_ratio(
                eps.unwrap_or(0.0),
                cash.unwrap_or(0.0),
                stock.unwrap_or(0.0),
            )
        })
        .collect();

    debug!(
        eps_record_count = eps_records.len(),
        dividend_record_count = dividend_records.len(),
        year_count = years.len(),
        "aligned eps vs dividends"
    );

    EpsDividendsView {
        set: AlignedSeriesSet {
            categories: years.iter().map(|&year| year_label(year)).collect(),
            series: vec![
                AlignedSeries::new(EPS_SERIES_LABEL, eps_values),
                AlignedSeries::new(CASH_DIVIDEND_SERIES_LABEL, cash_values),
                AlignedSeries::new(STOCK_DIVIDEND_SERIES_LABEL, stock_values),
            ],
        },
        payout_ratios,
    }
}

/// Latest non-null cumulative EPS reported for `year`: the record with the
/// highest month that actually carries a figure.
#[must_use]
pub fn latest_cumulative_eps(records: &[FinancialRecord], year: i32) -> Option<f64> {
    records
        .iter()
        .filter(|record| record.year == year && record.eps.is_some())
        .max_by_key(|record| record.month)
        .and_then(|record| record.eps)
}
