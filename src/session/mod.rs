//! Stateless request façade.
//!
//! Each operation takes a FEN, rebuilds the position, computes its
//! answer, and forgets everything: no game state survives between
//! calls, so concurrent requests never interact.

mod reply;

pub use reply::{AiMoveReply, GameStatus, GameWinner, HintReply, LegalMovesReply, MoveInfo, MoveOutcome};

use crate::error::{Error, Result};
use crate::eval::evaluate;
use crate::policy::{self, Difficulty};
use crate::position::{self, Position};
use reply::color_name;
use tracing::debug;

/// Start a fresh game: the standard starting position, evaluated.
pub fn new_game() -> MoveOutcome {
    let pos = Position::startpos();
    MoveOutcome {
        fen: pos.fen(),
        turn: color_name(pos.side_to_move()),
        played: None,
        halfmove_clock: pos.halfmove_clock(),
        fullmove_number: pos.fullmove_number(),
        status: GameStatus::of(&pos),
        evaluation: evaluate(&pos),
    }
}

/// Annotated legal moves of the piece on `square`.
///
/// Fails when the game is over, the square is empty, or the piece
/// belongs to the side not on move. A movable piece with nowhere to go
/// yields an empty list, not an error.
pub fn compute_legal_moves(fen: &str, square: &str) -> Result<LegalMovesReply> {
    let pos = Position::from_fen(fen)?;
    if pos.is_game_over() {
        return Err(Error::GameAlreadyOver);
    }

    let square = position::parse_square(square)?;
    let owner = pos.color_on(square).ok_or(Error::EmptySquare(square))?;
    if owner != pos.side_to_move() {
        return Err(Error::NotSideToMove(square));
    }

    let legal_moves: Vec<MoveInfo> = pos
        .moves_from(square)
        .into_iter()
        .map(|mv| MoveInfo::describe(&pos, mv))
        .collect();
    debug!(%square, count = legal_moves.len(), "legal moves computed");

    Ok(LegalMovesReply {
        side_to_move: color_name(pos.side_to_move()),
        in_check: pos.in_check(),
        legal_moves,
    })
}

/// Apply a player's move and report the resulting position.
///
/// The move arrives in coordinate notation, optionally with a separate
/// promotion letter. An illegal move leaves the position unchanged and
/// is reported as [`Error::IllegalMove`].
pub fn apply_player_move(fen: &str, mv: &str, promotion: Option<char>) -> Result<MoveOutcome> {
    let pos = Position::from_fen(fen)?;
    let mv = position::parse_move(mv, promotion)?;
    if !pos.legal_moves().contains(&mv) {
        return Err(Error::IllegalMove);
    }

    let played = MoveInfo::describe(&pos, mv);
    let after = pos.make_move(mv);
    debug!(mv = %played.uci, san = %played.san, "player move applied");

    Ok(MoveOutcome {
        fen: after.fen(),
        turn: color_name(after.side_to_move()),
        played: Some(played),
        halfmove_clock: after.halfmove_clock(),
        fullmove_number: after.fullmove_number(),
        status: GameStatus::of(&after),
        evaluation: evaluate(&after),
    })
}

/// Choose and apply the engine's move at the requested difficulty.
pub fn compute_ai_move(fen: &str, difficulty: &str) -> Result<AiMoveReply> {
    let pos = Position::from_fen(fen)?;
    if pos.is_game_over() {
        return Err(Error::GameAlreadyOver);
    }

    let difficulty = Difficulty::from_label(difficulty)?;
    let choice = policy::select_move(&pos, difficulty, &mut rand::thread_rng())?;

    let chosen = MoveInfo::describe(&pos, choice.mv);
    let after = pos.make_move(choice.mv);
    debug!(
        difficulty = difficulty.label(),
        mv = %chosen.uci,
        score = choice.score.raw(),
        "ai move chosen"
    );

    Ok(AiMoveReply {
        difficulty: difficulty.label(),
        depth: difficulty.profile().depth,
        chosen,
        fen: after.fen(),
        evaluation: evaluate(&after),
        status: GameStatus::of(&after),
    })
}

/// Suggest a strong move for the side to move.
///
/// The status and evaluation describe the suggestion, not an applied
/// move: the caller's position is left as-is.
pub fn compute_hint(fen: &str, difficulty: Option<&str>) -> Result<HintReply> {
    let pos = Position::from_fen(fen)?;
    if pos.is_game_over() {
        return Err(Error::GameAlreadyOver);
    }

    let difficulty = difficulty.map(Difficulty::from_label).transpose()?;
    let suggestion = policy::hint_move(&pos, difficulty)?;

    let hint = MoveInfo::describe(&pos, suggestion.mv);
    debug!(mv = %hint.uci, score = suggestion.score.raw(), "hint computed");

    Ok(HintReply {
        hint,
        evaluation: suggestion.score,
        status: GameStatus::of(&pos),
    })
}
