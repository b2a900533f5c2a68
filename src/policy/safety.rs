//! 1-ply tactical safety check.
//!
//! A move is "unsafe" when the position after it is in check or when
//! the destination square is attacked by the opponent. This is a cheap
//! heuristic, not a proof: it cannot see pins or deeper tactics, which
//! is the right fidelity for the target audience.

use crate::position::Position;
use crate::types::Move;

/// Whether playing `mv` leaves the moved piece on a square the opponent
/// does not attack. The probe works on a copy, so `pos` is untouched.
pub fn is_move_safe(pos: &Position, mv: Move) -> bool {
    let after = pos.make_move(mv);
    if after.in_check() {
        return false;
    }
    let opponent = after.side_to_move();
    !after.is_attacked_by(opponent, mv.get_dest())
}
