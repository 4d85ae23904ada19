use eps_trend::core::{
    AlignedSeries, AlignedSeriesSet, EpsDividendsView, FinancialRecord, YEAR_END_MONTH,
    YearWindow, align_eps_vs_dividends,
};

fn sample_set() -> AlignedSeriesSet {
    AlignedSeriesSet {
        categories: vec!["2023".to_owned(), "2024".to_owned()],
        series: vec![AlignedSeries::new("EPS", vec![Some(1.5), None])],
    }
}

#[test]
fn series_set_round_trips_through_the_v1_contract() {
    let set = sample_set();
    let json = set.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let decoded = AlignedSeriesSet::from_json_compat_str(&json).expect("decode");
    assert_eq!(decoded, set);
}

#[test]
fn bare_series_set_payload_is_accepted_for_compatibility() {
    let set = sample_set();
    let bare = serde_json::to_string(&set).expect("serialize bare");
    let decoded = AlignedSeriesSet::from_json_compat_str(&bare).expect("decode bare");
    assert_eq!(decoded, set);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r#"{"schema_version": 2, "set": {"categories": [], "series": []}}"#;
    let err = AlignedSeriesSet::from_json_compat_str(json).expect_err("must reject v2");
    assert!(format!("{err}").contains("schema version"));
}

#[test]
fn eps_dividends_view_round_trips_with_payout_annotations() {
    let eps_records = vec![FinancialRecord {
        entity_id: "2887".to_owned(),
        year: 2023,
        month: YEAR_END_MONTH,
        eps_month: None,
        eps: Some(4.0),
        dividend_cash: None,
        dividend_stock: None,
    }];
    let dividend_records = vec![FinancialRecord {
        entity_id: "2887".to_owned(),
        year: 2023,
        month: YEAR_END_MONTH,
        eps_month: None,
        eps: None,
        dividend_cash: Some(1.0),
        dividend_stock: Some(1.0),
    }];
    let view = align_eps_vs_dividends(&eps_records, &dividend_records, YearWindow::new(2024, 9));

    let json = view.to_json_contract_v1_pretty().expect("serialize");
    let decoded = EpsDividendsView::from_json_compat_str(&json).expect("decode");
    assert_eq!(decoded, view);
    assert_eq!(decoded.payout_ratios, vec![50]);
}
