//! Box-picking strategies.
//!
//! A strategy drives one scene to termination by calling `try_open_box`
//! repeatedly and branching on the outcome. Strategies keep no state
//! beyond a single scene.

mod loop_chain;
mod random_search;

use rand::Rng;

use crate::scene::Scene;

/// Selector for the available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Follow the slip chain starting from your own box number.
    Loop,
    /// Open boxes in a uniformly random order.
    Random,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Loop, StrategyKind::Random];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Loop => "loop",
            StrategyKind::Random => "random",
        }
    }

    /// Parse a CLI strategy name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Drive the scene until it is done.
    pub fn run(&self, scene: &mut Scene, rng: &mut impl Rng) {
        match self {
            StrategyKind::Loop => loop_chain::run(scene),
            StrategyKind::Random => random_search::run(scene, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_strategy_name_is_rejected() {
        assert_eq!(StrategyKind::from_name("clairvoyant"), None);
        assert_eq!(StrategyKind::from_name(""), None);
        assert_eq!(StrategyKind::from_name("Loop"), None);
    }
}
