use eps_trend::core::records::{Entity, EntityDirectory};
use eps_trend::core::{
    EntityRecords, FinancialRecord, YEAR_END_MONTH, align_monthly_comparison,
    align_yearly_comparison,
};

fn month_row(year: i32, month: u32, eps_month: f64) -> FinancialRecord {
    FinancialRecord {
        entity_id: String::new(),
        year,
        month,
        eps_month: Some(eps_month),
        eps: None,
        dividend_cash: None,
        dividend_stock: None,
    }
}

fn year_end_row(year: i32, eps: f64) -> FinancialRecord {
    FinancialRecord {
        entity_id: String::new(),
        year,
        month: YEAR_END_MONTH,
        eps_month: None,
        eps: Some(eps),
        dividend_cash: None,
        dividend_stock: None,
    }
}

fn directory() -> EntityDirectory {
    EntityDirectory::new(vec![
        Entity {
            id: "2887".to_owned(),
            name: "Taishin".to_owned(),
            color: Some("#1f77b4".to_owned()),
        },
        Entity {
            id: "2890".to_owned(),
            name: "Sinopac".to_owned(),
            color: None,
        },
    ])
}

#[test]
fn entity_missing_a_month_gets_a_gap_at_that_position() {
    let full_year: Vec<FinancialRecord> =
        (1..=12).map(|m| month_row(2023, m, 0.1 * m as f64)).collect();
    let missing_march: Vec<FinancialRecord> = (1..=12)
        .filter(|&m| m != 3)
        .map(|m| month_row(2023, m, 0.2 * m as f64))
        .collect();

    let set = align_monthly_comparison(
        &[
            EntityRecords::new("2887", &full_year),
            EntityRecords::new("2890", &missing_march),
        ],
        2023,
        &directory(),
    );

    assert_eq!(set.categories.len(), 12);
    assert!(set.is_aligned());
    let sinopac = &set.series[1];
    assert_eq!(sinopac.values[2], None);
    assert_eq!(sinopac.values[3], Some(0.2 * 4.0));
}

#[test]
fn legend_labels_join_id_and_display_name() {
    let records = vec![month_row(2023, 1, 0.5)];
    let set = align_monthly_comparison(
        &[EntityRecords::new("2887", &records)],
        2023,
        &directory(),
    );
    assert_eq!(set.series_labels(), vec!["2887 Taishin"]);
}

#[test]
fn unknown_entity_degrades_to_a_bare_id_label() {
    let records = vec![month_row(2023, 1, 0.5)];
    let set = align_monthly_comparison(
        &[EntityRecords::new("9999", &records)],
        2023,
        &directory(),
    );
    assert_eq!(set.series_labels(), vec!["9999"]);
}

#[test]
fn records_from_other_years_do_not_leak_into_the_target_year() {
    let records = vec![month_row(2022, 1, 9.9), month_row(2023, 2, 0.4)];
    let set = align_monthly_comparison(
        &[EntityRecords::new("2887", &records)],
        2023,
        &directory(),
    );
    assert_eq!(set.categories, vec!["02"]);
    assert_eq!(set.series[0].values, vec![Some(0.4)]);
}

#[test]
fn yearly_comparison_places_the_current_year_at_its_sorted_position() {
    let records = vec![
        year_end_row(2022, 1.2),
        year_end_row(2023, 1.5),
        // In-progress current year: cumulative figures only.
        FinancialRecord {
            entity_id: String::new(),
            year: 2024,
            month: 9,
            eps_month: None,
            eps: Some(3.2),
            dividend_cash: None,
            dividend_stock: None,
        },
    ];

    let set = align_yearly_comparison(
        &[EntityRecords::new("2887", &records)],
        &[2024, 2022, 2023],
        2024,
        &directory(),
    );

    assert_eq!(set.categories, vec!["2022", "2023", "2024"]);
    assert_eq!(
        set.series[0].values,
        vec![Some(1.2), Some(1.5), Some(3.2)]
    );
}

#[test]
fn yearly_comparison_without_the_current_year_uses_year_end_figures_only() {
    let records = vec![year_end_row(2021, 1.0), year_end_row(2022, 1.1)];
    let set = align_yearly_comparison(
        &[EntityRecords::new("2890", &records)],
        &[2021, 2022],
        2024,
        &directory(),
    );
    assert_eq!(set.series[0].values, vec![Some(1.0), Some(1.1)]);
    assert!(set.is_aligned());
}

#[test]
fn requested_year_missing_from_records_is_a_gap_for_that_entity() {
    let records = vec![year_end_row(2022, 1.1)];
    let set = align_yearly_comparison(
        &[EntityRecords::new("2887", &records)],
        &[2021, 2022],
        2024,
        &directory(),
    );
    assert_eq!(set.series[0].values, vec![None, Some(1.1)]);
}
