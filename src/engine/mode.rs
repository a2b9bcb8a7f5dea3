/// How much of the search space a game sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Capped operator bags, canonical pair-splits and every pruning rule.
    #[default]
    Tuned,
    /// Capped bags first, then all the others; mirrored pair-splits; keeps
    /// intermediates that reproduce an operand.
    Thorough,
}

impl SearchMode {
    pub fn pruning_rules(self) -> PruningRules {
        match self {
            SearchMode::Tuned => PruningRules {
                reject_reproductions: true,
            },
            SearchMode::Thorough => PruningRules {
                reject_reproductions: false,
            },
        }
    }

    pub fn sweeps_uncapped(self) -> bool {
        self == SearchMode::Thorough
    }

    pub fn mirrors_pairs(self) -> bool {
        self == SearchMode::Thorough
    }
}

/// Optional pruning rules applied on top of the game's legality rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruningRules {
    /// Reject `a - b == b` and `a / b == b`.
    pub reject_reproductions: bool,
}

impl Default for PruningRules {
    fn default() -> Self {
        SearchMode::default().pruning_rules()
    }
}
