//! Attacked-square queries built on the rules engine's lookup tables.
//!
//! Works backwards from the target square: look up the moves each piece
//! kind would have *from* the square and intersect with the attacker's
//! pieces of that kind.

use crate::types::{Color, Piece, EMPTY};
use chess::{Board, Square};

/// Whether any piece of `by` attacks `sq`.
pub(crate) fn is_attacked(board: &Board, by: Color, sq: Square) -> bool {
    let them = *board.color_combined(by);
    let occupied = *board.combined();

    if chess::get_knight_moves(sq) & *board.pieces(Piece::Knight) & them != EMPTY {
        return true;
    }
    if chess::get_king_moves(sq) & *board.pieces(Piece::King) & them != EMPTY {
        return true;
    }

    // A pawn of `by` attacks sq exactly when a pawn of the other color
    // standing on sq would attack it back.
    let their_pawns = *board.pieces(Piece::Pawn) & them;
    if chess::get_pawn_attacks(sq, !by, their_pawns) != EMPTY {
        return true;
    }

    let diagonal_sliders = (*board.pieces(Piece::Bishop) | *board.pieces(Piece::Queen)) & them;
    if chess::get_bishop_moves(sq, occupied) & diagonal_sliders != EMPTY {
        return true;
    }

    let straight_sliders = (*board.pieces(Piece::Rook) | *board.pieces(Piece::Queen)) & them;
    chess::get_rook_moves(sq, occupied) & straight_sliders != EMPTY
}
