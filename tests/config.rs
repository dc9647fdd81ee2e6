use poker_deals::{
    DealError, DeckSpec,
    config::{Config, DeckConfig},
};
use std::path::Path;

fn problems(yaml: &str) -> String {
    match Config::from_yaml(yaml) {
        Err(DealError::Config(message)) => message,
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn defaults_are_manila() {
    let config = Config::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.deck_spec(), Ok(DeckSpec::manila()));
    assert_eq!(config.players, ["Rose", "Colin"]);
    assert!(config.scenario.is_empty());
    assert_eq!(Config::from_yaml("{}"), Ok(Config::default()));
}

#[test]
fn partial_yaml_keeps_defaults() {
    let config = Config::from_yaml("ante: 5\nraise: 3\ndeck:\n  number_of_suits: 2\n").unwrap();
    assert_eq!(config.ante, 5);
    assert_eq!(config.bet, 2);
    assert_eq!(config.raise, 3);
    assert_eq!(
        config.deck,
        DeckConfig {
            lowest_card: 7,
            highest_card: 14,
            number_of_suits: 2,
        }
    );
    assert_eq!(config.deck_spec().map(|deck| deck.size()), Ok(16));
}

#[test]
fn every_problem_reported() {
    let message = problems("ante: 0\nraise: 0\ndeck:\n  lowest_card: 1\n  highest_card: 15\n");
    for expected in [
        "ante (0) must be greater than 0.",
        "raise (0) must be greater than 0.",
        "lowest_card (1) must be from 2 to 13.",
        "highest_card (15) cannot be greater than 14.",
    ] {
        assert!(message.contains(expected), "{message}");
    }
    assert!(!message.contains("bet ("), "{message}");
}

#[test]
fn inverted_deck() {
    let message = problems("deck:\n  lowest_card: 10\n  highest_card: 9\n  number_of_suits: 0\n");
    assert!(
        message.contains("highest_card (9) cannot be less than or equal to lowest_card (10)."),
        "{message}"
    );
    assert!(message.contains("number_of_suits (0) must be from 1 to 4."), "{message}");
}

#[test]
fn rounds_and_deck_size() {
    assert!(problems("number_of_rounds: 5").contains("number_of_rounds (5) must be from 1 to 4."));
    assert!(problems("number_of_rounds: 0").contains("number_of_rounds (0)"));

    let small = "deck:\n  lowest_card: 13\n  highest_card: 14\n";
    assert!(
        problems(small).contains("deck size (8) cannot be less than the minimum deck size (9)."),
        "{}",
        problems(small)
    );
    // Eight cards still deal through the turn
    let config = Config::from_yaml(&format!("{small}number_of_rounds: 3\n")).unwrap();
    assert_eq!(config.deck_spec().map(|deck| deck.size()), Ok(8));
}

#[test]
fn unknown_fields_rejected() {
    assert!(matches!(Config::from_yaml("antes: 3"), Err(DealError::Config(_))));
    assert!(matches!(
        Config::from_yaml("deck:\n  suits: 3\n"),
        Err(DealError::Config(_))
    ));
    assert!(matches!(Config::from_yaml("ante: -1"), Err(DealError::Config(_))));
}

#[test]
fn sample_config_locates_scenario() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/manila.yaml");
    let config = Config::from_path(&path).unwrap();
    assert_eq!(config, Config { scenario: config.scenario.clone(), ..Config::default() });

    let scenario = &config.scenario;
    let deck = config.deck_spec().unwrap();
    let child_indices = deck
        .locate(&scenario.hole, &scenario.flop, &scenario.turn, &scenario.river)
        .unwrap();
    assert_eq!(child_indices.len(), 4);
}

#[test]
fn missing_file() {
    let error = Config::from_path(Path::new("does/not/exist.yaml")).unwrap_err();
    assert!(matches!(error, DealError::Config(_)));
    assert!(error.to_string().contains("does/not/exist.yaml"), "{error}");
}
