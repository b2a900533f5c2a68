//! Serializable reply payloads for the session operations.
//!
//! These are the shapes the out-of-scope HTTP layer renders; everything
//! here is plain data with `Serialize` derived.

use serde::Serialize;

use crate::policy::safety::is_move_safe;
use crate::position::{uci_string, Position};
use crate::types::{Color, Move, Score};

/// A move annotated for the UI.
#[derive(Debug, Clone, Serialize)]
pub struct MoveInfo {
    pub from_square: String,
    pub to_square: String,
    pub uci: String,
    pub san: String,
    pub promotion: Option<char>,
    pub is_capture: bool,
    pub gives_check: bool,
    pub is_safe: bool,
}

impl MoveInfo {
    /// Annotate a legal move of `pos`.
    pub(crate) fn describe(pos: &Position, mv: Move) -> Self {
        MoveInfo {
            from_square: mv.get_source().to_string(),
            to_square: mv.get_dest().to_string(),
            uci: uci_string(mv),
            san: pos.san(mv),
            promotion: mv.get_promotion().map(crate::position::promotion_char),
            is_capture: pos.is_capture(mv),
            gives_check: pos.gives_check(mv),
            is_safe: is_move_safe(pos, mv),
        }
    }
}

/// Side that won, or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameWinner {
    White,
    Black,
    Draw,
}

/// Outcome flags of a position.
#[derive(Debug, Clone, Serialize)]
pub struct GameStatus {
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_insufficient_material: bool,
    pub is_seventyfive_moves: bool,
    pub winner: Option<GameWinner>,
    pub result: Option<&'static str>,
}

impl GameStatus {
    pub(crate) fn of(pos: &Position) -> Self {
        let is_checkmate = pos.is_checkmate();
        let is_stalemate = pos.is_stalemate();
        let is_insufficient_material = pos.is_insufficient_material();
        let is_seventyfive_moves = pos.is_seventyfive_moves();

        let (winner, result) = if is_checkmate {
            match pos.side_to_move() {
                Color::White => (Some(GameWinner::Black), Some("0-1")),
                Color::Black => (Some(GameWinner::White), Some("1-0")),
            }
        } else if is_stalemate || is_insufficient_material || is_seventyfive_moves {
            (Some(GameWinner::Draw), Some("1/2-1/2"))
        } else {
            (None, None)
        };

        GameStatus {
            is_check: pos.in_check(),
            is_checkmate,
            is_stalemate,
            is_insufficient_material,
            is_seventyfive_moves,
            winner,
            result,
        }
    }
}

/// Position state after starting a game or applying a move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveOutcome {
    pub fen: String,
    pub turn: &'static str,
    /// The move that produced this position; `None` for a fresh game.
    pub played: Option<MoveInfo>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub status: GameStatus,
    pub evaluation: Score,
}

/// Legal moves of one piece, annotated.
#[derive(Debug, Clone, Serialize)]
pub struct LegalMovesReply {
    pub side_to_move: &'static str,
    pub in_check: bool,
    pub legal_moves: Vec<MoveInfo>,
}

/// The engine's chosen move and the position it leads to.
#[derive(Debug, Clone, Serialize)]
pub struct AiMoveReply {
    pub difficulty: &'static str,
    pub depth: u8,
    pub chosen: MoveInfo,
    pub fen: String,
    pub evaluation: Score,
    pub status: GameStatus,
}

/// A search-backed suggestion for the side to move.
#[derive(Debug, Clone, Serialize)]
pub struct HintReply {
    pub hint: MoveInfo,
    pub evaluation: Score,
    pub status: GameStatus,
}

pub(crate) fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
