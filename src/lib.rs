//! Move intelligence for a kid-friendly chess trainer.
//!
//! Given a board position this crate evaluates it, picks a move scaled
//! to a difficulty level, flags tactically unsafe moves, and produces
//! hints. Board legality itself comes from the `chess` crate; this
//! crate layers clocks, notation, evaluation and policy on top.
//!
//! # Architecture
//! - `position`: rules-engine shim for FEN round-tripping, clocks,
//!   outcome flags, move classification, SAN
//! - `eval`: hand-tuned evaluation (material, piece-square tables,
//!   center, mobility, king safety, bishop pair)
//! - `search`: depth-bounded negamax with alpha-beta and move ordering
//! - `policy`: difficulty profiles, safety checker, move selection,
//!   hint generation
//! - `session`: stateless request façade with serializable replies
//!
//! Every operation is a synchronous computation over one request-owned
//! [`Position`]; nothing is cached or shared across calls.

pub mod error;
pub mod eval;
pub mod policy;
pub mod position;
pub mod search;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use eval::evaluate;
pub use policy::safety::is_move_safe;
pub use policy::{hint_move, select_move, Difficulty, DifficultyProfile};
pub use position::{Position, STARTING_FEN};
pub use search::{find_best_move, ScoredMove};
pub use types::{Score, CHECKMATE_SCORE};
