use crate::{
    deck::DeckSpec,
    error::{DealError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Game settings, loaded from YAML. Missing fields fall back to Manila poker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub players: [String; 2],
    pub ante: u32,
    pub bet: u32,
    pub raise: u32,
    pub deck: DeckConfig,
    pub number_of_rounds: usize,
    pub scenario: Scenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    pub lowest_card: u8,
    pub highest_card: u8,
    pub number_of_suits: u8,
}

/// Specific cards to locate in the game tree, as labels like `As`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub hole: Vec<String>,
    pub flop: Vec<String>,
    pub turn: Vec<String>,
    pub river: Vec<String>,
}
impl Scenario {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hole.is_empty() && self.flop.is_empty() && self.turn.is_empty() && self.river.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: ["Rose".to_owned(), "Colin".to_owned()],
            ante: 1,
            bet: 2,
            raise: 2,
            deck: DeckConfig::default(),
            number_of_rounds: 4,
            scenario: Scenario::default(),
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            lowest_card: 7,
            highest_card: 14,
            number_of_suits: 4,
        }
    }
}

impl Config {
    /// # Errors
    /// `Config` if the file can't be read, isn't valid YAML, or fails [`Self::validate`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .map_err(|error| DealError::Config(format!("can't read {}: {error}", path.display())))?;
        Self::from_yaml(&yaml)
    }

    /// # Errors
    /// `Config` if `yaml` doesn't parse or fails [`Self::validate`].
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|error| DealError::Config(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every setting and reports all problems at once.
    ///
    /// # Errors
    /// `Config` listing each violated bound.
    pub fn validate(&self) -> Result<()> {
        let DeckConfig {
            lowest_card: lowest,
            highest_card: highest,
            number_of_suits: suits,
        } = self.deck;
        let mut problems = Vec::new();

        for (name, value) in [("ante", self.ante), ("bet", self.bet), ("raise", self.raise)] {
            if value == 0 {
                problems.push(format!("{name} ({value}) must be greater than 0."));
            }
        }
        if !(2..=13).contains(&lowest) {
            problems.push(format!("lowest_card ({lowest}) must be from 2 to 13."));
        }
        if highest <= lowest {
            problems.push(format!(
                "highest_card ({highest}) cannot be less than or equal to lowest_card ({lowest})."
            ));
        }
        if highest > 14 {
            problems.push(format!("highest_card ({highest}) cannot be greater than 14."));
        }
        if !(1..=4).contains(&suits) {
            problems.push(format!("number_of_suits ({suits}) must be from 1 to 4."));
        }
        match DeckSpec::minimum_size(self.number_of_rounds) {
            None => problems.push(format!(
                "number_of_rounds ({}) must be from 1 to 4.",
                self.number_of_rounds
            )),
            Some(minimum) => {
                let size = (usize::from(highest.saturating_sub(lowest)) + 1) * usize::from(suits);
                if size < minimum {
                    problems.push(format!(
                        "deck size ({size}) cannot be less than the minimum deck size ({minimum})."
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DealError::Config(problems.join(" ")))
        }
    }

    /// # Errors
    /// As [`DeckSpec::from_nums`], only after a failed [`Self::validate`].
    pub fn deck_spec(&self) -> Result<DeckSpec> {
        DeckSpec::from_nums(
            self.deck.lowest_card,
            self.deck.highest_card,
            self.deck.number_of_suits,
        )
    }
}
