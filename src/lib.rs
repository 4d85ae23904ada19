//! eps-trend-rs: series-alignment core for per-company EPS and dividend
//! dashboards.
//!
//! Raw per-record datasets (one row per entity/year/month) come in from a
//! statically hosted JSON endpoint; chart-ready aligned series sets
//! (shared category axis + positionally aligned value rows) come out.
//! Rendering, widget wiring, and routing stay on the host's side of the
//! seam.

pub mod api;
pub mod core;
pub mod error;
pub mod source;
pub mod telemetry;

pub use api::{BoardConfig, Notification, TrendBoard};
pub use core::{AlignedSeries, AlignedSeriesSet, EpsDividendsView, FinancialRecord, YearWindow};
pub use error::{TrendError, TrendResult};
