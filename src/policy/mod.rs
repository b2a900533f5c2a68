//! Difficulty policy: blends best-move search with deliberately
//! imperfect play.
//!
//! The two casual levels sometimes swap the search for a shuffled,
//! safety-aware heuristic so the engine blunders at a rate scaled to the
//! difficulty; hints always go through the search because a hint must be
//! genuine best play.

mod difficulty;
pub mod safety;

pub use difficulty::{Difficulty, DifficultyProfile};

use crate::error::{Error, Result};
use crate::eval::evaluate;
use crate::position::Position;
use crate::search::{self, ordering, ScoredMove};
use crate::types::{Move, Score};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Score penalty recorded against unsafe candidates in the casual
/// heuristic. Penalized moves stay selectable, just de-weighted.
const UNSAFE_PENALTY: Score = Score::cp(150);

/// Fullmove count past which an unspecified hint defaults to the
/// deepest profile.
const LATE_GAME_FULLMOVE: u32 = 20;

/// Pick a move for the given difficulty level.
///
/// Casual levels take the shuffled heuristic with the profile's
/// randomness probability; everything else searches at the profile's
/// depth. Fails with [`Error::NoLegalMoves`] when the position has none.
pub fn select_move<R: Rng>(
    pos: &Position,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<ScoredMove> {
    let profile = difficulty.profile();
    if difficulty.plays_casually() && rng.gen::<f64>() < profile.randomness {
        debug!(difficulty = difficulty.label(), "taking the casual branch");
        casual_move(pos, profile.randomness, rng)
    } else {
        search::find_best_move(pos, profile.depth)
    }
}

/// Suggest genuine best play for the position.
///
/// With no difficulty given, late games get the deepest profile and
/// everything else the intermediate one. Never the casual branch.
pub fn hint_move(pos: &Position, difficulty: Option<Difficulty>) -> Result<ScoredMove> {
    let difficulty = difficulty.unwrap_or_else(|| default_hint_difficulty(pos));
    let depth = difficulty.profile().depth.max(1);
    search::find_best_move(pos, depth)
}

pub(crate) fn default_hint_difficulty(pos: &Position) -> Difficulty {
    if pos.fullmove_number() > LATE_GAME_FULLMOVE {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

/// The casual heuristic: shuffle the legal moves, score each one ply
/// deep while noting which are safe, penalize the unsafe ones, then
/// either play the most forcing safe move or fall back to the best
/// recorded score. One pass builds both views.
fn casual_move<R: Rng>(pos: &Position, randomness: f64, rng: &mut R) -> Result<ScoredMove> {
    let mut moves = pos.legal_moves();
    if moves.is_empty() {
        return Err(Error::NoLegalMoves);
    }
    moves.shuffle(rng);

    let mut safe_moves: Vec<Move> = Vec::new();
    let mut candidates: Vec<ScoredMove> = Vec::with_capacity(moves.len());
    for &mv in &moves {
        let is_safe = safety::is_move_safe(pos, mv);
        // Scored from the mover's perspective, hence the negation.
        let score = -evaluate(&pos.make_move(mv));
        if is_safe {
            safe_moves.push(mv);
            candidates.push(ScoredMove { mv, score });
        } else {
            candidates.push(ScoredMove {
                mv,
                score: score - UNSAFE_PENALTY,
            });
        }
    }

    if !safe_moves.is_empty() && rng.gen::<f64>() > randomness {
        if let Some(&mv) = safe_moves
            .iter()
            .max_by_key(|&&mv| ordering::priority(pos, mv))
        {
            let score = -evaluate(&pos.make_move(mv));
            return Ok(ScoredMove { mv, score });
        }
    }

    // No safe move, or the dice said otherwise: best recorded score,
    // penalty included.
    candidates
        .into_iter()
        .max_by_key(|candidate| candidate.score)
        .ok_or(Error::NoLegalMoves)
}
