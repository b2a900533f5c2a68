//! Error types for the move-intelligence engine.
//!
//! Every fallible operation returns one of these variants synchronously;
//! nothing is retried internally and nothing is swallowed.

use chess::Square;
use thiserror::Error;

/// Errors surfaced by the engine operations
#[derive(Debug, Error)]
pub enum Error {
    /// The position string failed to parse into a valid board state
    #[error("invalid FEN string: {0}")]
    InvalidPosition(String),

    /// A move, hint, or move list was requested for a finished game
    #[error("game is already over, start a new game to continue")]
    GameAlreadyOver,

    /// Search or selection was invoked on a position with no legal moves.
    /// Unreachable once the game-over check has passed.
    #[error("no legal moves available, the game might be over")]
    NoLegalMoves,

    /// The difficulty label does not name a configured profile
    #[error("unknown difficulty '{0}', choose from explorer, beginner, intermediate, advanced")]
    UnknownDifficulty(String),

    /// The submitted move is not legal in the current position
    #[error("illegal move for the current board state")]
    IllegalMove,

    /// The move string could not be parsed into from/to/promotion fields
    #[error("invalid move encoding '{0}'")]
    InvalidMoveEncoding(String),

    /// The square string is not a coordinate like "e2"
    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    /// No piece stands on the selected square
    #[error("there is no piece on {0}")]
    EmptySquare(Square),

    /// The selected piece belongs to the side not on move
    #[error("the piece on {0} is not the side to move's")]
    NotSideToMove(Square),
}

/// Result type alias for engine operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
