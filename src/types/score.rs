//! Score type for evaluation and search.
//!
//! Scores are centipawns from the perspective of the side to move.
//! `±CHECKMATE_SCORE` is the flat bound the evaluator reports for a
//! mated side; `±SCORE_INFINITY` is only used as an alpha-beta window.

use serde::Serialize;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Score reported when the side to move has been checkmated.
pub const CHECKMATE_SCORE: i32 = 100_000;

/// Alpha-beta window bound, strictly outside every reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// A centipawn score.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[repr(transparent)]
pub struct Score(pub i32);

impl Score {
    /// Create a new score from centipawns
    #[inline]
    pub const fn cp(centipawns: i32) -> Self {
        Score(centipawns)
    }

    /// Score of a drawn position
    #[inline]
    pub const fn draw() -> Self {
        Score(0)
    }

    /// Score of a position where the side to move is checkmated
    #[inline]
    pub const fn checkmated() -> Self {
        Score(-CHECKMATE_SCORE)
    }

    /// Infinity (for alpha-beta bounds)
    #[inline]
    pub const fn infinity() -> Self {
        Score(SCORE_INFINITY)
    }

    /// Negative infinity
    #[inline]
    pub const fn neg_infinity() -> Self {
        Score(-SCORE_INFINITY)
    }

    /// Get the raw centipawn value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this score is at or beyond the forced-mate bound
    #[inline]
    pub const fn is_mate_bound(self) -> bool {
        self.0 >= CHECKMATE_SCORE || self.0 <= -CHECKMATE_SCORE
    }
}

impl Add for Score {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Score(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Score(self.0 - rhs.0)
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Score(-self.0)
    }
}

impl From<i32> for Score {
    #[inline]
    fn from(v: i32) -> Self {
        Score(v)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= CHECKMATE_SCORE {
            write!(f, "mate")
        } else if self.0 <= -CHECKMATE_SCORE {
            write!(f, "mated")
        } else {
            write!(f, "cp {}", self.0)
        }
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score({})", self)
    }
}
