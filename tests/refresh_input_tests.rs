use eps_trend::api::{DebounceConfig, RefreshInput};

#[test]
fn three_rapid_changes_yield_exactly_one_fetch_for_the_final_value() {
    let mut input = RefreshInput::new(DebounceConfig { settle_ms: 50 });
    input.on_input("2", 0);
    input.on_input("28", 10);
    input.on_input("2887", 20);

    assert!(input.poll(30).is_none());
    assert!(input.poll(60).is_none());

    let command = input.poll(70).expect("final value settles once");
    assert_eq!(command.value, "2887");
    assert_eq!(command.generation, 1);

    assert!(input.poll(200).is_none());
    assert_eq!(input.generation(), 1);
}

#[test]
fn settling_the_same_value_twice_fetches_once() {
    let mut input = RefreshInput::new(DebounceConfig { settle_ms: 50 });
    input.on_input("2887", 0);
    assert!(input.poll(100).is_some());

    input.on_input("2887", 500);
    assert!(input.poll(600).is_none());
    assert_eq!(input.committed(), Some("2887"));
}

#[test]
fn a_newer_commit_invalidates_outstanding_generations() {
    let mut input = RefreshInput::new(DebounceConfig { settle_ms: 50 });
    input.on_input("2887", 0);
    let first = input.poll(100).expect("first settle");

    input.on_input("2890", 200);
    let second = input.poll(300).expect("second settle");

    assert!(!input.accepts(first.generation));
    assert!(input.accepts(second.generation));
    assert_eq!(second.value, "2890");
}

#[test]
fn pending_input_is_replaced_not_queued() {
    let mut input = RefreshInput::new(DebounceConfig { settle_ms: 50 });
    input.on_input("2887", 0);
    input.on_input("2890", 40);

    // The first candidate never settles; only the replacement commits.
    let command = input.poll(95).expect("replacement settles");
    assert_eq!(command.value, "2890");
    assert!(input.poll(500).is_none());
}
