//! Difficulty profiles for the trainer's four play levels.
//!
//! A fixed enum rather than a label-keyed map: unknown labels can only
//! exist at the parsing boundary, never past it.

use crate::error::{Error, Result};

/// Search depth and casual-play probability for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Negamax depth in plies, 1 to 3.
    pub depth: u8,
    /// Probability of swapping the search for the casual heuristic.
    pub randomness: f64,
}

/// The four difficulty levels the trainer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Explorer,
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Explorer,
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Parse a user-supplied label; case-insensitive, surrounding
    /// whitespace ignored.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_lowercase().as_str() {
            "explorer" => Ok(Difficulty::Explorer),
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(Error::UnknownDifficulty(label.trim().to_string())),
        }
    }

    /// Canonical label, as echoed back to callers.
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Explorer => "explorer",
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Explorer => DifficultyProfile {
                depth: 1,
                randomness: 0.6,
            },
            Difficulty::Beginner => DifficultyProfile {
                depth: 1,
                randomness: 0.4,
            },
            Difficulty::Intermediate => DifficultyProfile {
                depth: 2,
                randomness: 0.1,
            },
            Difficulty::Advanced => DifficultyProfile {
                depth: 3,
                randomness: 0.0,
            },
        }
    }

    /// Levels that may trade the search for the casual heuristic.
    pub const fn plays_casually(self) -> bool {
        matches!(self, Difficulty::Explorer | Difficulty::Beginner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_label(level.label()).unwrap(), level);
        }
    }

    #[test]
    fn parsing_is_forgiving_about_case_and_spaces() {
        assert_eq!(
            Difficulty::from_label("  Advanced ").unwrap(),
            Difficulty::Advanced
        );
        assert_eq!(
            Difficulty::from_label("EXPLORER").unwrap(),
            Difficulty::Explorer
        );
    }

    #[test]
    fn unknown_labels_name_the_choices() {
        let err = Difficulty::from_label("grandmaster").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("grandmaster"));
        assert!(message.contains("explorer"));
        assert!(message.contains("advanced"));
    }

    #[test]
    fn profiles_match_the_configuration() {
        assert_eq!(Difficulty::Explorer.profile().depth, 1);
        assert_eq!(Difficulty::Explorer.profile().randomness, 0.6);
        assert_eq!(Difficulty::Beginner.profile().depth, 1);
        assert_eq!(Difficulty::Beginner.profile().randomness, 0.4);
        assert_eq!(Difficulty::Intermediate.profile().depth, 2);
        assert_eq!(Difficulty::Intermediate.profile().randomness, 0.1);
        assert_eq!(Difficulty::Advanced.profile().depth, 3);
        assert_eq!(Difficulty::Advanced.profile().randomness, 0.0);

        assert!(Difficulty::Explorer.plays_casually());
        assert!(Difficulty::Beginner.plays_casually());
        assert!(!Difficulty::Intermediate.plays_casually());
        assert!(!Difficulty::Advanced.plays_casually());
    }
}
