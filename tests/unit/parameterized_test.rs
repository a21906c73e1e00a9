//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use gloomlog::menu::prompt::Selector;
use gloomlog::models::{Choice, EncounterKind, EncounterType, GridLocation, Outcome};
use gloomlog::paths;
use gloomlog::storage::{ReconcilePolicy, SaveName};
use test_case::test_case;

// =============================================================================
// Save Names
// =============================================================================

#[test_case("alice", Some("alice") ; "plain name")]
#[test_case("  Alice ", Some("alice") ; "trimmed and lowercased")]
#[test_case("my campaign", Some("my campaign") ; "inner space kept")]
#[test_case("", None ; "empty")]
#[test_case("   ", None ; "blank")]
#[test_case(".hidden", None ; "leading dot")]
#[test_case("a/b", None ; "slash")]
#[test_case("a\\b", None ; "backslash")]
#[test_case("tab\there", None ; "control character")]
fn test_save_name(raw: &str, expected: Option<&str>) {
    let name = SaveName::new(raw).ok();
    assert_eq!(name.as_ref().map(SaveName::as_str), expected);
}

// =============================================================================
// File Names
// =============================================================================

#[test_case("alice.json.gml", Some("alice") ; "current")]
#[test_case("alice.json.gml.new", Some("alice") ; "incoming")]
#[test_case("alice.json.gml.prev", Some("alice") ; "backup")]
#[test_case("alice.json.gml.old", Some("alice") ; "stale")]
#[test_case(".json.gml", None ; "empty stem")]
#[test_case("alice.json", None ; "wrong suffix")]
#[test_case("alice.json.gml.bak", None ; "unknown artifact")]
fn test_save_name_of(file_name: &str, expected: Option<&str>) {
    assert_eq!(paths::save_name_of(file_name), expected);
}

// =============================================================================
// Display Formats
// =============================================================================

fn scenario(outcome: Option<Outcome>) -> EncounterKind {
    EncounterKind::Scenario {
        identifier: 1,
        name: "Black Barrow".to_string(),
        grid_location: GridLocation::new('G', 10).unwrap(),
        outcome,
    }
}

#[test_case(scenario(Some(Outcome::Failure)), "Scenario: 1. Black Barrow (G-10): failure" ; "played scenario")]
#[test_case(scenario(None), "Scenario: 1. Black Barrow (G-10)" ; "unlocked scenario")]
#[test_case(EncounterKind::Quest { identifier: 4, name: "Seeker".to_string() }, "Quest: 4. Seeker" ; "quest")]
#[test_case(EncounterKind::CityEvent { identifier: 0, choice: Some(Choice::A) }, "City Event: 0.: A" ; "city event")]
#[test_case(EncounterKind::RoadEvent { identifier: 9, choice: None }, "Road Event: 9." ; "unlocked road event")]
#[test_case(EncounterKind::Treasure { identifier: 42 }, "Treasure: 42." ; "treasure")]
#[test_case(EncounterKind::AncientTechnology { identifier: 2 }, "Ancient Technology: 2." ; "ancient technology")]
#[test_case(EncounterKind::PartyAchievement { name: "Jekserah's Plans".to_string() }, "Party Achievement: Jekserah's Plans" ; "party achievement")]
#[test_case(EncounterKind::Character { name: "Brute".to_string() }, "Character: Brute" ; "character")]
fn test_display(kind: EncounterKind, expected: &str) {
    assert_eq!(kind.to_string(), expected);
}

#[test_case("scenario", Some(EncounterType::Scenario) ; "scenario")]
#[test_case("item design", Some(EncounterType::ItemDesign) ; "two words")]
#[test_case("Scenario", None ; "case sensitive")]
#[test_case("boss", None ; "unknown")]
fn test_from_friendly_name(name: &str, expected: Option<EncounterType>) {
    assert_eq!(EncounterType::from_friendly_name(name), expected);
}

// =============================================================================
// Grid Locations
// =============================================================================

#[test_case('A', 1, true ; "first cell")]
#[test_case('O', 18, true ; "last cell")]
#[test_case('P', 1, false ; "column past end")]
#[test_case('a', 1, false ; "lowercase column")]
#[test_case('A', 0, false ; "row zero")]
#[test_case('A', 19, false ; "row past end")]
fn test_grid_bounds(column: char, row: u8, valid: bool) {
    assert_eq!(GridLocation::new(column, row).is_ok(), valid);
}

// =============================================================================
// Prompt Indicators
// =============================================================================

#[test_case(&["help", "exit", "new"], '>' ; "numbers and shorthands")]
#[test_case(&["city event", "character"], '#' ; "shared first letter")]
#[test_case(&["1st", "2nd"], '@' ; "digit first letters")]
#[test_case(&["10", "11"], ':' ; "literal only")]
fn test_indicator(options: &[&str], expected: char) {
    assert_eq!(Selector::new(options).indicator(), expected);
}

// =============================================================================
// Policies
// =============================================================================

#[test_case("eager", Ok(ReconcilePolicy::Eager) ; "eager")]
#[test_case("startup", Ok(ReconcilePolicy::Eager) ; "startup alias")]
#[test_case("LAZY", Ok(ReconcilePolicy::Lazy) ; "uppercase")]
#[test_case("on-access", Ok(ReconcilePolicy::Lazy) ; "on access alias")]
#[test_case("never", Err(()) ; "unknown")]
fn test_policy_parse(input: &str, expected: Result<ReconcilePolicy, ()>) {
    assert_eq!(input.parse::<ReconcilePolicy>().map_err(|_| ()), expected);
}

#[test_case(ReconcilePolicy::Eager, "eager" ; "eager")]
#[test_case(ReconcilePolicy::Lazy, "lazy" ; "lazy")]
fn test_policy_display_parses_back(policy: ReconcilePolicy, text: &str) {
    assert_eq!(policy.to_string(), text);
    assert_eq!(text.parse::<ReconcilePolicy>(), Ok(policy));
}
