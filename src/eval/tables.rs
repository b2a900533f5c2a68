//! Piece-square tables.
//!
//! Simplified tables that nudge the engine toward development and center
//! control. Index 0 is a1, matching the rules engine's square numbering.
//! White reads a table directly; Black reads it from the vertically
//! mirrored square and negates the value. The king tables are
//! pre-oriented and read directly by both sides.

use crate::types::{Color, Piece, Square, Value};

#[rustfmt::skip]
const PAWN_TABLE: [Value; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [Value; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [Value; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [Value; 64] = [
     0,  0,  5, 10, 10,  5,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [Value; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

// King, middlegame: stay home, castle, hide behind pawns.
#[rustfmt::skip]
const KING_TABLE_MID: [Value; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

// King, endgame: walk to the center.
#[rustfmt::skip]
const KING_TABLE_END: [Value; 64] = [
   -50,-40,-30,-20,-20,-30,-40,-50,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -50,-30,-30,-30,-30,-30,-30,-50,
];

/// Positional value of `piece` of `color` on `sq`, signed toward White.
pub(crate) fn piece_square_value(piece: Piece, color: Color, sq: Square, endgame: bool) -> Value {
    let index = sq.to_index();
    let table = match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => {
            let table = if endgame { &KING_TABLE_END } else { &KING_TABLE_MID };
            return table[index];
        }
    };

    match color {
        Color::White => table[index],
        Color::Black => -table[mirror(index)],
    }
}

/// Flip a square index to the other side's point of view (rank mirrored).
#[inline]
const fn mirror(index: usize) -> usize {
    index ^ 56
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn black_values_mirror_and_negate() {
        let d4 = Square::from_str("d4").unwrap();
        let d5 = Square::from_str("d5").unwrap();
        assert_eq!(
            piece_square_value(Piece::Knight, Color::White, d4, false),
            -piece_square_value(Piece::Knight, Color::Black, d5, false),
        );
    }

    #[test]
    fn king_tables_are_phase_selected() {
        let e1 = Square::from_str("e1").unwrap();
        let e4 = Square::from_str("e4").unwrap();
        assert_eq!(piece_square_value(Piece::King, Color::White, e1, false), 0);
        assert_eq!(piece_square_value(Piece::King, Color::White, e4, false), -40);
        assert_eq!(piece_square_value(Piece::King, Color::White, e4, true), 40);
        // Both sides read the king tables directly.
        assert_eq!(piece_square_value(Piece::King, Color::Black, e4, true), 40);
    }
}
