//! Game configuration.
//!
//! `GameConfig` gathers everything decided before the first move:
//! - which side the human plays, or how the side prompt is interpreted
//! - which `MoveSelector` drives the automated side
//! - the selector seed and whether it runs on a worker thread

use serde::{Deserialize, Serialize};

use super::player::Player;

/// How unrecognized input at the side prompt is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidePolicy {
    /// Anything other than "white" or "black" means Black.
    #[default]
    DefaultBlack,
    /// Unrecognized input is an error and the prompt is repeated.
    Strict,
}

/// Built-in selectors for the automated side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorKind {
    /// Uniform random over the legal moves.
    #[default]
    Random,
    /// Always the first legal move in generation order.
    First,
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human side. `None` asks at startup.
    pub human: Option<Player>,

    pub side_policy: SidePolicy,

    pub selector: SelectorKind,

    /// Seed for the random selector. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Run selection on a worker thread against a board snapshot.
    pub background: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the human side, skipping the prompt.
    #[must_use]
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = Some(human);
        self
    }

    #[must_use]
    pub fn with_side_policy(mut self, policy: SidePolicy) -> Self {
        self.side_policy = policy;
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: SelectorKind) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.human, None);
        assert_eq!(config.side_policy, SidePolicy::DefaultBlack);
        assert_eq!(config.selector, SelectorKind::Random);
        assert_eq!(config.seed, None);
        assert!(!config.background);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_human(Player::White)
            .with_side_policy(SidePolicy::Strict)
            .with_selector(SelectorKind::First)
            .with_seed(99)
            .with_background(true);

        assert_eq!(config.human, Some(Player::White));
        assert_eq!(config.side_policy, SidePolicy::Strict);
        assert_eq!(config.selector, SelectorKind::First);
        assert_eq!(config.seed, Some(99));
        assert!(config.background);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_seed(5).with_human(Player::Black);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
