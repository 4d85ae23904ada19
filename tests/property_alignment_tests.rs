use eps_trend::core::{
    EntityRecords, FinancialRecord, YearWindow, align_eps_vs_dividends, align_monthly_comparison,
    align_monthly_yoy, align_yearly_comparison,
};
use eps_trend::core::records::EntityDirectory;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = FinancialRecord> {
    (
        2015i32..=2025,
        1u32..=12,
        proptest::option::of(-5.0f64..5.0),
        proptest::option::of(-5.0f64..50.0),
        proptest::option::of(0.0f64..5.0),
        proptest::option::of(0.0f64..5.0),
    )
        .prop_map(|(year, month, eps_month, eps, dividend_cash, dividend_stock)| {
            FinancialRecord {
                entity_id: "2887".to_owned(),
                year,
                month,
                eps_month,
                eps,
                dividend_cash,
                dividend_stock,
            }
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<FinancialRecord>> {
    proptest::collection::vec(record_strategy(), 0..64)
}

fn categories_strictly_ascending(categories: &[String]) -> bool {
    categories
        .windows(2)
        .all(|pair| pair[0].parse::<i64>().unwrap() < pair[1].parse::<i64>().unwrap())
}

proptest! {
    #[test]
    fn monthly_yoy_rows_always_match_the_axis(
        records in records_strategy(),
        lookback in 0u32..=5
    ) {
        let set = align_monthly_yoy(&records, YearWindow::new(2024, lookback));
        prop_assert!(set.is_aligned());
        prop_assert!(categories_strictly_ascending(&set.categories));
    }

    #[test]
    fn eps_vs_dividends_rows_always_match_the_axis(
        eps_records in records_strategy(),
        dividend_records in records_strategy(),
        lookback in 0u32..=10
    ) {
        let view = align_eps_vs_dividends(
            &eps_records,
            &dividend_records,
            YearWindow::new(2024, lookback),
        );
        prop_assert!(view.is_aligned());
        prop_assert!(categories_strictly_ascending(&view.set.categories));
    }

    #[test]
    fn monthly_comparison_rows_always_match_the_axis(
        first in records_strategy(),
        second in records_strategy(),
        target_year in 2015i32..=2025
    ) {
        let directory = EntityDirectory::default();
        let set = align_monthly_comparison(
            &[
                EntityRecords::new("2887", &first),
                EntityRecords::new("2890", &second),
            ],
            target_year,
            &directory,
        );
        prop_assert_eq!(set.series.len(), 2);
        prop_assert!(set.is_aligned());
        prop_assert!(categories_strictly_ascending(&set.categories));
    }

    #[test]
    fn yearly_comparison_axis_is_the_deduplicated_sorted_request(
        records in records_strategy(),
        years in proptest::collection::vec(2015i32..=2025, 0..12)
    ) {
        let directory = EntityDirectory::default();
        let set = align_yearly_comparison(
            &[EntityRecords::new("2887", &records)],
            &years,
            2024,
            &directory,
        );
        prop_assert!(set.is_aligned());
        prop_assert!(categories_strictly_ascending(&set.categories));

        let mut expected: Vec<i32> = years.clone();
        expected.sort_unstable();
        expected.dedup();
        let expected_labels: Vec<String> =
            expected.iter().map(|year| year.to_string()).collect();
        prop_assert_eq!(set.categories, expected_labels);
    }
}
