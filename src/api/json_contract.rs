use serde::{Deserialize, Serialize};

use crate::core::aligned::AlignedSeriesSet;
use crate::core::dividends::EpsDividendsView;
use crate::error::{TrendError, TrendResult};

pub const SERIES_SET_JSON_SCHEMA_V1: u32 = 1;
pub const EPS_DIVIDENDS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned payload handed to a charting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSetJsonContractV1 {
    pub schema_version: u32,
    pub set: AlignedSeriesSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsDividendsJsonContractV1 {
    pub schema_version: u32,
    pub view: EpsDividendsView,
}

impl AlignedSeriesSet {
    pub fn to_json_contract_v1_pretty(&self) -> TrendResult<String> {
        let payload = SeriesSetJsonContractV1 {
            schema_version: SERIES_SET_JSON_SCHEMA_V1,
            set: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TrendError::InvalidPayload(format!("failed to serialize series set contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> TrendResult<Self> {
        if let Ok(set) = serde_json::from_str::<AlignedSeriesSet>(input) {
            return Ok(set);
        }
        let payload: SeriesSetJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TrendError::InvalidPayload(format!("failed to parse series set json payload: {e}"))
        })?;
        if payload.schema_version != SERIES_SET_JSON_SCHEMA_V1 {
            return Err(TrendError::InvalidPayload(format!(
                "unsupported series set schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.set)
    }
}

impl EpsDividendsView {
    pub fn to_json_contract_v1_pretty(&self) -> TrendResult<String> {
        let payload = EpsDividendsJsonContractV1 {
            schema_version: EPS_DIVIDENDS_JSON_SCHEMA_V1,
            view: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TrendError::InvalidPayload(format!(
                "failed to serialize eps/dividends contract v1: {e}"
            ))
        })
    }

    pub fn from_json_compat_str(input: &str) -> TrendResult<Self> {
        if let Ok(view) = serde_json::from_str::<EpsDividendsView>(input) {
            return Ok(view);
        }
        let payload: EpsDividendsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TrendError::InvalidPayload(format!("failed to parse eps/dividends json payload: {e}"))
        })?;
        if payload.schema_version != EPS_DIVIDENDS_JSON_SCHEMA_V1 {
            return Err(TrendError::InvalidPayload(format!(
                "unsupported eps/dividends schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.view)
    }
}
