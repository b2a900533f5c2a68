//! Request-scoped board state on top of the `chess` rules engine.
//!
//! The `chess` crate owns legality: move generation, make-move, check and
//! mate detection all come from it. `Position` layers on what it does not
//! track: the halfmove clock and fullmove number, FEN round-tripping,
//! draw-rule flags, move classification, and notation, so callers can
//! hand a FEN in and get a FEN back.

mod attacks;
mod san;

use crate::error::{Error, Result};
use crate::types::{BoardStatus, CastleRights, Color, Move, MoveGen, Piece, Rank, Square};
use chess::Board;
use std::str::FromStr;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Dark-square mask, a1 = bit 0.
const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;

/// A single board position owned by one request.
///
/// Copy-on-make: [`Position::make_move`] returns the successor position and
/// leaves `self` untouched, which keeps search recursion and safety probes
/// trivially exception-safe.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Position {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Position {
            board: Board::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parse a FEN string.
    ///
    /// Board legality is validated by the rules engine; the clock fields
    /// are tracked here because the rules engine does not store them.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let fen = fen.trim();
        let board =
            Board::from_str(fen).map_err(|err| Error::InvalidPosition(err.to_string()))?;

        let mut fields = fen.split_whitespace().skip(4);
        let halfmove_clock = match fields.next() {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::InvalidPosition(format!("bad halfmove clock '{raw}'")))?,
            None => 0,
        };
        let fullmove_number = match fields.next() {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::InvalidPosition(format!("bad fullmove number '{raw}'")))?,
            None => 1,
        };

        Ok(Position {
            board,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Serialize back to FEN.
    pub fn fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for rank in (0..8).rev() {
            let mut empty = 0u8;
            for file in 0..8 {
                let sq = Square::make_square(
                    Rank::from_index(rank),
                    chess::File::from_index(file),
                );
                match (self.board.piece_on(sq), self.board.color_on(sq)) {
                    (Some(piece), Some(color)) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece_char(piece, color));
                    }
                    _ => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.board.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let castles_len = fen.len();
        push_castles(&mut fen, self.board.castle_rights(Color::White), true);
        push_castles(&mut fen, self.board.castle_rights(Color::Black), false);
        if fen.len() == castles_len {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant_target() {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Access the underlying rules-engine board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.board.color_on(sq)
    }

    /// All strictly legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Number of legal moves without materializing the list.
    pub fn legal_move_count(&self) -> usize {
        MoveGen::new_legal(&self.board).len()
    }

    /// Legal moves of the piece standing on `sq`.
    pub fn moves_from(&self, sq: Square) -> Vec<Move> {
        MoveGen::new_legal(&self.board)
            .filter(|mv| mv.get_source() == sq)
            .collect()
    }

    /// Apply a move, returning the successor position with updated clocks.
    pub fn make_move(&self, mv: Move) -> Position {
        let pawn_move = self.board.piece_on(mv.get_source()) == Some(Piece::Pawn);
        let resets_clock = pawn_move || self.is_capture(mv);
        let black_moved = self.board.side_to_move() == Color::Black;

        Position {
            board: self.board.make_move_new(mv),
            halfmove_clock: if resets_clock { 0 } else { self.halfmove_clock + 1 },
            fullmove_number: self.fullmove_number + u32::from(black_moved),
        }
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        *self.board.checkers() != chess::EMPTY
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Neither side retains mating material: bare kings, a lone minor
    /// piece, or same-colored bishops only.
    pub fn is_insufficient_material(&self) -> bool {
        let heavy = self.board.pieces(Piece::Pawn)
            | self.board.pieces(Piece::Rook)
            | self.board.pieces(Piece::Queen);
        if heavy.popcnt() > 0 {
            return false;
        }

        let knights = self.board.pieces(Piece::Knight).popcnt();
        let bishops = *self.board.pieces(Piece::Bishop);
        if knights + bishops.popcnt() <= 1 {
            return true;
        }

        let dark = chess::BitBoard::new(DARK_SQUARES);
        knights == 0 && ((bishops & dark) == bishops || (bishops & dark) == chess::EMPTY)
    }

    /// 75-move rule: 150 halfmoves without a capture or pawn move.
    #[inline]
    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= 150
    }

    pub fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing
            || self.is_insufficient_material()
            || self.is_seventyfive_moves()
    }

    /// Whether `mv` captures, including en passant.
    pub fn is_capture(&self, mv: Move) -> bool {
        self.board.piece_on(mv.get_dest()).is_some() || self.is_en_passant(mv)
    }

    /// A pawn sliding diagonally onto an empty square is an en-passant capture.
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
            && self.board.piece_on(mv.get_dest()).is_none()
    }

    /// Castling is encoded as the king stepping two files.
    pub fn is_castling(&self, mv: Move) -> bool {
        self.board.piece_on(mv.get_source()) == Some(Piece::King)
            && mv
                .get_source()
                .get_file()
                .to_index()
                .abs_diff(mv.get_dest().get_file().to_index())
                == 2
    }

    /// Whether playing `mv` puts the opponent in check.
    pub fn gives_check(&self, mv: Move) -> bool {
        *self.board.make_move_new(mv).checkers() != chess::EMPTY
    }

    /// Whether any piece of `by` attacks `sq`.
    pub fn is_attacked_by(&self, by: Color, sq: Square) -> bool {
        attacks::is_attacked(&self.board, by, sq)
    }

    /// Standard algebraic notation for a legal move of this position.
    pub fn san(&self, mv: Move) -> String {
        san::format_san(self, mv)
    }

    /// The rules engine records the pawn that just double-stepped; FEN
    /// wants the square behind it.
    fn en_passant_target(&self) -> Option<Square> {
        let sq = self.board.en_passant()?;
        let target_rank = match self.board.color_on(sq) {
            Some(Color::White) => Rank::Third,
            Some(Color::Black) => Rank::Sixth,
            None => return Some(sq),
        };
        Some(Square::make_square(target_rank, sq.get_file()))
    }
}

/// Parse a coordinate like "e2".
pub fn parse_square(text: &str) -> Result<Square> {
    let text = text.trim();
    Square::from_str(text).map_err(|_| Error::InvalidSquare(text.to_string()))
}

/// Parse a coordinate-notation move ("e2e4", "e7e8q"). A promotion piece
/// may also arrive as a separate character; it is only consulted when the
/// move string itself carries none.
pub fn parse_move(text: &str, promotion: Option<char>) -> Result<Move> {
    let text = text.trim();
    if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
        return Err(Error::InvalidMoveEncoding(text.to_string()));
    }

    let from = Square::from_str(&text[0..2])
        .map_err(|_| Error::InvalidMoveEncoding(text.to_string()))?;
    let to = Square::from_str(&text[2..4])
        .map_err(|_| Error::InvalidMoveEncoding(text.to_string()))?;

    let encoded = text.chars().nth(4);
    let promo = match encoded.or(promotion) {
        Some(letter) => Some(promotion_piece(letter).ok_or_else(|| {
            Error::InvalidMoveEncoding(format!("bad promotion piece '{letter}'"))
        })?),
        None => None,
    };

    Ok(Move::new(from, to, promo))
}

/// Coordinate notation for a move ("e2e4", "e7e8q").
pub fn uci_string(mv: Move) -> String {
    let mut text = format!("{}{}", mv.get_source(), mv.get_dest());
    if let Some(promo) = mv.get_promotion() {
        text.push(promotion_char(promo));
    }
    text
}

/// Lowercase letter of a promotion piece.
pub fn promotion_char(piece: Piece) -> char {
    match piece {
        Piece::Queen => 'q',
        Piece::Rook => 'r',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        _ => unreachable!(),
    }
}

fn promotion_piece(letter: char) -> Option<Piece> {
    match letter {
        'q' | 'Q' => Some(Piece::Queen),
        'r' | 'R' => Some(Piece::Rook),
        'b' | 'B' => Some(Piece::Bishop),
        'n' | 'N' => Some(Piece::Knight),
        _ => None,
    }
}

fn piece_char(piece: Piece, color: Color) -> char {
    let letter = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn push_castles(fen: &mut String, rights: CastleRights, white: bool) {
    let letters = match rights {
        CastleRights::Both => "KQ",
        CastleRights::KingSide => "K",
        CastleRights::QueenSide => "Q",
        CastleRights::NoRights => "",
    };
    for letter in letters.chars() {
        fen.push(if white {
            letter
        } else {
            letter.to_ascii_lowercase()
        });
    }
}
