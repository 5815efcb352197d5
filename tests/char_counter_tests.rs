//! Tests for character counters

use alphanex::ui::char_counter::{CharacterCounter, CounterState};

#[test]
fn test_readout_recomputes_on_every_edit() {
    let mut counter = CharacterCounter::new(10);
    assert_eq!(counter.readout(), "0/10");

    counter.update("hello");
    assert_eq!(counter.readout(), "5/10");

    counter.update("");
    assert_eq!(counter.readout(), "0/10");
}

#[test]
fn test_nine_of_ten_warns_and_ten_of_ten_is_danger() {
    let mut counter = CharacterCounter::new(10);

    counter.update("123456789");
    assert_eq!(counter.state(), CounterState::Warning);

    counter.update("1234567890");
    assert_eq!(counter.state(), CounterState::Danger);
}

#[test]
fn test_below_ninety_percent_is_plain() {
    let mut counter = CharacterCounter::new(1000);
    counter.update(&"x".repeat(899));
    assert_eq!(counter.state(), CounterState::Plain);

    counter.update(&"x".repeat(900));
    assert_eq!(counter.state(), CounterState::Warning);
}

#[test]
fn test_danger_only_at_exactly_full() {
    let mut counter = CharacterCounter::new(1000);
    counter.update(&"x".repeat(999));
    assert_eq!(counter.state(), CounterState::Warning);
    assert!(!counter.is_full());

    counter.update(&"x".repeat(1000));
    assert_eq!(counter.state(), CounterState::Danger);
    assert!(counter.is_full());
}
