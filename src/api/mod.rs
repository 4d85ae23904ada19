pub mod board;
pub mod json_contract;
pub mod refresh;

pub use board::{BoardConfig, Notification, TrendBoard};
pub use json_contract::{
    EPS_DIVIDENDS_JSON_SCHEMA_V1, EpsDividendsJsonContractV1, SERIES_SET_JSON_SCHEMA_V1,
    SeriesSetJsonContractV1,
};
pub use refresh::{DebounceConfig, GenerationGate, RefreshCommand, RefreshInput};
