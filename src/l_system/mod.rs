//! The l_system module provides a simple Lindenmeyer rewriting engine for
//! plotted line-art. Take a look at the [`crate::l_system::LSystem`] struct
//! for more details, and examples.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::LSystemError;

/// Number of generations expanded when the caller has no opinion. The axiom
/// counts as the first generation.
pub const DEFAULT_GENERATIONS: u32 = 5;

/// # LSystem
///
/// A context-free L-system: an axiom, a set of per-symbol production rules,
/// and the rotation unit (in degrees) that gives the `+`/`-` symbols their
/// geometric meaning when the expansion is walked by a
/// [`crate::turtle::Turtle`]. Symbols without a production rewrite to
/// themselves, which is what keeps `+` and `-` alive across generations.
///
/// The `Default` system is the Gosper curve (flowsnake):
///
/// # Example
///
/// ```rust
/// use flowsnake::l_system::LSystem;
/// use flowsnake::turtle::{Turtle, TurtleTrait};
///
/// let gosper = LSystem::default();
/// let pattern = gosper.expand(2).unwrap();
/// assert_eq!(pattern, "A-B--B+A++AA+B-");
///
/// let segments = Turtle::new()
///     .walk_pattern(&pattern, gosper.angle)
///     .into_segments();
/// assert_eq!(segments.len(), 7);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LSystem {
    pub axiom: String,
    pub rules: HashMap<char, String>,
    /// Rotation unit in degrees for the turn symbols.
    pub angle: f64,
}

impl Default for LSystem {
    /// The Gosper curve. Both productions are exactly 15 symbols long;
    /// they are copied verbatim, not derived.
    fn default() -> Self {
        LSystem {
            axiom: "A".to_string(),
            rules: HashMap::from([
                ('A', "A-B--B+A++AA+B-".to_string()),
                ('B', "+A-BB--B-A++A+B".to_string()),
            ]),
            angle: 60.0,
        }
    }
}

impl LSystem {

    fn recur(&self, state: String, remaining: u32) -> String {
        if remaining == 0 {
            return state;
        }
        let new_state = state.chars().map(|c| {
            match self.rules.get(&c) {
                Some(replacement) => replacement.clone(),
                None => String::from(c),
            }
        }).collect();
        self.recur(new_state, remaining - 1)
    }

    /// # expand
    ///
    /// Expands the L-system to the requested generation and returns the
    /// resulting symbol string, ready for
    /// [`crate::turtle::TurtleTrait::walk_pattern`]. The axiom is
    /// generation 1, so `expand(1)` returns it unchanged and each further
    /// generation applies one full rewrite pass. A generation count of
    /// zero is a configuration error, rejected before any rewriting.
    ///
    /// Expansion is a pure function of the system and the generation
    /// count: no caching, no randomness. An empty axiom just expands to
    /// the empty string.
    pub fn expand(&self, generations: u32) -> Result<String, LSystemError> {
        if generations < 1 {
            return Err(LSystemError::InvalidGenerations);
        }
        Ok(self.recur(self.axiom.clone(), generations - 1))
    }

    /// Expands [`DEFAULT_GENERATIONS`] generations.
    pub fn expand_default(&self) -> String {
        self.recur(self.axiom.clone(), DEFAULT_GENERATIONS - 1)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand_simple() {
        let system = LSystem {
            axiom: "A".to_string(),
            rules: HashMap::from([
                ('A', "AB".to_string()),
                ('B', "A".to_string())]),
            angle: 60.0,
        };
        assert!(system.expand(3).unwrap() == "ABA".to_string());
        assert!(system.expand(6).unwrap() == "ABAABABAABAAB".to_string());
    }

    #[test]
    fn test_first_generation_is_axiom() {
        let system = LSystem::default();
        assert_eq!(system.expand(1).unwrap(), system.axiom);
    }

    #[test]
    fn test_gosper_second_generation() {
        let system = LSystem::default();
        for replacement in system.rules.values() {
            assert_eq!(replacement.chars().count(), 15);
        }
        assert_eq!(system.expand(2).unwrap(), "A-B--B+A++AA+B-");
    }

    #[test]
    fn test_gosper_growth() {
        let system = LSystem::default();
        // Turn symbols are terminal, so the string grows as
        // L(g+1) = L(g) + 14 * 7^(g-1) while draw symbols multiply by 7.
        assert_eq!(system.expand(1).unwrap().len(), 1);
        assert_eq!(system.expand(2).unwrap().len(), 15);
        let third = system.expand(3).unwrap();
        assert_eq!(third.len(), 113);
        let draws = third.chars().filter(|c| matches!(c, 'A' | 'B')).count();
        assert_eq!(draws, 49);
    }

    #[test]
    fn test_zero_generations_rejected() {
        let system = LSystem::default();
        assert_eq!(system.expand(0), Err(LSystemError::InvalidGenerations));
    }

    #[test]
    fn test_empty_axiom() {
        let system = LSystem {
            axiom: "".to_string(),
            ..LSystem::default()
        };
        assert_eq!(system.expand(4).unwrap(), "");
    }

    #[test]
    fn test_expand_deterministic() {
        let system = LSystem::default();
        assert_eq!(system.expand(4).unwrap(), system.expand(4).unwrap());
        assert_eq!(system.expand_default(), system.expand(DEFAULT_GENERATIONS).unwrap());
    }
}
