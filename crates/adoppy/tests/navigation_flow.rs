//! End-to-end navigation through the simulator: catalog to detail and back,
//! with the catalog sequence unchanged throughout.

use adoppy::app::App;
use adoppy::nav::Screen;
use teacup::simulator::ProgramSimulator;
use teacup::{KeyMsg, KeyType, Message};

fn key_char(ch: char) -> Message {
    Message::new(KeyMsg::from_char(ch))
}

fn key_type(kt: KeyType) -> Message {
    Message::new(KeyMsg::from_type(kt))
}

/// Assert the catalog rows are exactly the sample data, in catalog order.
/// Matching name and age together keeps "Bolt" from matching "Boltie".
fn assert_sample_catalog_order(view: &str) {
    let rows: Vec<&str> = view
        .lines()
        .filter(|line| line.contains("Distance 5k"))
        .collect();
    let expected = [
        ("Haru", "1 year old"),
        ("Boltie", "2 years old"),
        ("Max", "4 years old"),
        ("Bolt", "3 years old"),
    ];
    assert_eq!(rows.len(), expected.len());
    for (row, (name, age)) in rows.iter().zip(expected) {
        assert!(row.contains(name), "row {row:?} missing {name}");
        assert!(row.contains(age), "row {row:?} missing {age}");
    }
}

fn new_sim() -> ProgramSimulator<App> {
    colored::control::set_override(false);
    let mut sim = ProgramSimulator::new(App::new());
    sim.init();
    sim
}

#[test]
fn test_activating_first_row_shows_haru_detail() {
    let mut sim = new_sim();

    sim.send(key_type(KeyType::Enter));
    sim.run_until_idle();

    assert_eq!(sim.model().screen(), Screen::Detail(0));
    let view = sim.last_view().unwrap();
    assert!(view.contains("Haru"));
    assert!(view.contains("1 year old"));
    assert!(view.contains("Corgi"));
    assert!(view.contains("Male"));
    assert!(view.contains("[ Adopt me now ]"));
}

#[test]
fn test_activating_second_row_shows_boltie_detail() {
    let mut sim = new_sim();

    sim.send(key_char('j'));
    sim.send(key_type(KeyType::Enter));
    sim.run_until_idle();

    assert_eq!(sim.model().screen(), Screen::Detail(1));
    let view = sim.last_view().unwrap();
    assert!(view.contains("Boltie"));
    assert!(view.contains("2 years old"));
    assert!(view.contains("Pug"));
    assert!(view.contains("Female"));
}

#[test]
fn test_back_returns_to_unchanged_catalog() {
    let mut sim = new_sim();

    sim.send(key_type(KeyType::Enter));
    sim.send(key_type(KeyType::Esc));
    sim.run_until_idle();

    assert_eq!(sim.model().screen(), Screen::Catalog);
    assert_sample_catalog_order(sim.last_view().unwrap());
}

#[test]
fn test_adopt_also_returns_with_puppy_still_listed() {
    let mut sim = new_sim();

    // Activate the last row, then press the adopt control.
    sim.send(key_char('G'));
    sim.send(key_type(KeyType::Enter));
    sim.run_until_idle();
    assert_eq!(sim.model().screen(), Screen::Detail(3));

    sim.send(key_type(KeyType::Enter));
    sim.run_until_idle();

    assert_eq!(sim.model().screen(), Screen::Catalog);
    // No adoption effect: Bolt is still in the catalog, order intact.
    assert_sample_catalog_order(sim.last_view().unwrap());
}

#[test]
fn test_repeated_round_trips() {
    let mut sim = new_sim();

    for _ in 0..3 {
        sim.send(key_type(KeyType::Enter));
        sim.send(key_type(KeyType::Esc));
        sim.run_until_idle();
        assert_eq!(sim.model().screen(), Screen::Catalog);
    }
    assert_sample_catalog_order(sim.last_view().unwrap());
}

#[test]
fn test_quit_from_catalog() {
    let mut sim = new_sim();

    sim.send(key_char('q'));
    sim.run_until_idle();

    assert!(sim.stats().quit_requested);
}
