//! Standard algebraic notation for legal moves.
//!
//! Built on the legal-move list rather than piece bookkeeping: rival
//! pieces for disambiguation are simply other legal moves to the same
//! destination by the same piece kind.

use super::Position;
use crate::types::{File, Move, Piece, Rank};

/// Format a legal move of `pos` in SAN ("Nf3", "exd5", "O-O", "e8=Q+").
///
/// Falls back to coordinate notation if the source square is empty,
/// which cannot happen for a move out of this position's legal list.
pub(crate) fn format_san(pos: &Position, mv: Move) -> String {
    let piece = match pos.piece_on(mv.get_source()) {
        Some(piece) => piece,
        None => return super::uci_string(mv),
    };

    let mut san = String::new();
    if pos.is_castling(mv) {
        san.push_str(if mv.get_dest().get_file() == File::G {
            "O-O"
        } else {
            "O-O-O"
        });
    } else if piece == Piece::Pawn {
        if pos.is_capture(mv) {
            san.push(file_char(mv.get_source().get_file()));
            san.push('x');
        }
        san.push_str(&mv.get_dest().to_string());
        if let Some(promo) = mv.get_promotion() {
            san.push('=');
            san.push(super::promotion_char(promo).to_ascii_uppercase());
        }
    } else {
        san.push(piece_letter(piece));
        push_disambiguation(pos, mv, piece, &mut san);
        if pos.is_capture(mv) {
            san.push('x');
        }
        san.push_str(&mv.get_dest().to_string());
    }

    let after = pos.make_move(mv);
    if after.in_check() {
        san.push(if after.legal_move_count() == 0 { '#' } else { '+' });
    }
    san
}

/// Add the file and/or rank of the source square when another piece of
/// the same kind could also reach the destination.
fn push_disambiguation(pos: &Position, mv: Move, piece: Piece, san: &mut String) {
    let source = mv.get_source();
    let rivals: Vec<_> = pos
        .legal_moves()
        .into_iter()
        .filter(|other| {
            other.get_dest() == mv.get_dest()
                && other.get_source() != source
                && pos.piece_on(other.get_source()) == Some(piece)
        })
        .map(|other| other.get_source())
        .collect();

    if rivals.is_empty() {
        return;
    }

    let file_unique = rivals.iter().all(|sq| sq.get_file() != source.get_file());
    let rank_unique = rivals.iter().all(|sq| sq.get_rank() != source.get_rank());
    if file_unique {
        san.push(file_char(source.get_file()));
    } else if rank_unique {
        san.push(rank_char(source.get_rank()));
    } else {
        san.push(file_char(source.get_file()));
        san.push(rank_char(source.get_rank()));
    }
}

fn piece_letter(piece: Piece) -> char {
    match piece {
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
        Piece::Pawn => 'P',
    }
}

#[inline]
fn file_char(file: File) -> char {
    char::from(b'a' + file.to_index() as u8)
}

#[inline]
fn rank_char(rank: Rank) -> char {
    char::from(b'1' + rank.to_index() as u8)
}
