pub mod aligned;
pub mod calendar;
pub mod comparison;
pub mod dividends;
mod join;
pub mod records;
pub mod yoy;

pub use aligned::{AlignedSeries, AlignedSeriesSet};
pub use calendar::{YearWindow, month_label, year_label};
pub use comparison::{EntityRecords, align_monthly_comparison, align_yearly_comparison};
pub use dividends::{
    CASH_DIVIDEND_SERIES_LABEL, EPS_SERIES_LABEL, EpsDividendsView, STOCK_DIVIDEND_SERIES_LABEL,
    align_eps_vs_dividends, latest_cumulative_eps, payout_ratio,
};
pub use records::{Entity, EntityDirectory, FinancialRecord, YEAR_END_MONTH};
pub use yoy::align_monthly_yoy;
