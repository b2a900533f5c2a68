//! End-to-end scenarios through the session façade.

use chess_academy::error::Error;
use chess_academy::session::{
    apply_player_move, compute_ai_move, compute_hint, compute_legal_moves, new_game,
};
use chess_academy::{Position, CHECKMATE_SCORE, STARTING_FEN};

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
const BACK_RANK_MATE: &str = "6k1/5ppp/8/8/8/8/8/4R2K w - - 0 1";
const QUEEN_MATE: &str = "6k1/5ppp/8/8/4Q3/5K2/8/6q1 w - - 0 1";

#[test]
fn new_game_reports_the_starting_position() {
    let outcome = new_game();
    assert_eq!(outcome.fen, STARTING_FEN);
    assert_eq!(outcome.turn, "white");
    assert!(outcome.played.is_none());
    assert_eq!(outcome.fullmove_number, 1);
    assert!(!outcome.status.is_check);
    assert!(outcome.status.winner.is_none());
}

#[test]
fn ai_plays_a_legal_opening_move() {
    // Scenario A: the advanced engine answers the starting position with
    // one of its twenty legal moves, and the fullmove counter stays 1.
    let reply = compute_ai_move(STARTING_FEN, "advanced").unwrap();
    assert_eq!(reply.difficulty, "advanced");
    assert_eq!(reply.depth, 3);

    let start = Position::from_fen(STARTING_FEN).unwrap();
    let legal: Vec<String> = start
        .legal_moves()
        .into_iter()
        .map(chess_academy::position::uci_string)
        .collect();
    assert_eq!(legal.len(), 20);
    assert!(legal.contains(&reply.chosen.uci));

    let after = Position::from_fen(&reply.fen).unwrap();
    assert_eq!(after.fullmove_number(), 1);
    assert_eq!(after.side_to_move(), chess::Color::Black);
}

#[test]
fn hint_finds_the_forced_mate() {
    // Scenario B: with a mate in one on the board, the hint is the
    // mating move at any depth, scored at the checkmate bound.
    let reply = compute_hint(BACK_RANK_MATE, Some("advanced")).unwrap();
    assert_eq!(reply.hint.uci, "e1e8");
    assert_eq!(reply.hint.san, "Re8#");
    assert!(reply.evaluation.raw() >= CHECKMATE_SCORE);
    // The hint describes the current position, which is not over yet.
    assert!(!reply.status.is_checkmate);

    // The queen-and-king puzzle admits two mates, so only
    // require that the suggestion ends the game.
    let reply = compute_hint(QUEEN_MATE, None).unwrap();
    assert!(reply.hint.san.ends_with('#'));
    assert!(reply.evaluation.raw() >= CHECKMATE_SCORE);
}

#[test]
fn finished_games_yield_no_ai_move() {
    // Scenario C: requesting a move in a decided position is an error,
    // whatever the difficulty.
    for difficulty in ["explorer", "beginner", "intermediate", "advanced"] {
        assert!(matches!(
            compute_ai_move(FOOLS_MATE, difficulty),
            Err(Error::GameAlreadyOver)
        ));
    }
    assert!(matches!(
        compute_hint(FOOLS_MATE, None),
        Err(Error::GameAlreadyOver)
    ));
    assert!(matches!(
        compute_legal_moves(FOOLS_MATE, "e2"),
        Err(Error::GameAlreadyOver)
    ));
}

#[test]
fn dead_material_counts_as_finished() {
    // K+N vs K cannot be won; the trainer refuses to play on.
    let fen = "8/8/8/4k3/4N3/4K3/8/8 w - - 0 1";
    assert!(matches!(
        compute_hint(fen, Some("advanced")),
        Err(Error::GameAlreadyOver)
    ));
    assert!(matches!(
        compute_ai_move(fen, "beginner"),
        Err(Error::GameAlreadyOver)
    ));
}

#[test]
fn pawn_moves_from_the_start_square() {
    // Scenario D: e2 offers exactly e3 and e4, neither a capture.
    let reply = compute_legal_moves(STARTING_FEN, "e2").unwrap();
    assert_eq!(reply.side_to_move, "white");
    assert!(!reply.in_check);

    let mut targets: Vec<&str> = reply
        .legal_moves
        .iter()
        .map(|info| info.to_square.as_str())
        .collect();
    targets.sort_unstable();
    assert_eq!(targets, ["e3", "e4"]);
    assert!(reply.legal_moves.iter().all(|info| !info.is_capture));
    assert!(reply.legal_moves.iter().all(|info| info.is_safe));
}

#[test]
fn legal_move_lookup_errors() {
    assert!(matches!(
        compute_legal_moves(STARTING_FEN, "e4"),
        Err(Error::EmptySquare(_))
    ));
    assert!(matches!(
        compute_legal_moves(STARTING_FEN, "e7"),
        Err(Error::NotSideToMove(_))
    ));
    assert!(matches!(
        compute_legal_moves(STARTING_FEN, "z9"),
        Err(Error::InvalidSquare(_))
    ));
    assert!(matches!(
        compute_legal_moves("garbage", "e2"),
        Err(Error::InvalidPosition(_))
    ));
}

#[test]
fn player_moves_are_validated_and_applied() {
    let outcome = apply_player_move(STARTING_FEN, "e2e4", None).unwrap();
    assert_eq!(outcome.turn, "black");
    assert_eq!(outcome.fullmove_number, 1);
    assert_eq!(outcome.halfmove_clock, 0);
    let played = outcome.played.expect("a move was played");
    assert_eq!(played.san, "e4");
    assert!(!played.is_capture);

    assert!(matches!(
        apply_player_move(STARTING_FEN, "e2e5", None),
        Err(Error::IllegalMove)
    ));
    assert!(matches!(
        apply_player_move(STARTING_FEN, "e2", None),
        Err(Error::InvalidMoveEncoding(_))
    ));
}

#[test]
fn promotion_goes_through_the_separate_field() {
    let outcome = apply_player_move("8/4P2k/8/8/8/8/8/4K3 w - - 0 1", "e7e8", Some('q')).unwrap();
    let played = outcome.played.expect("a move was played");
    assert_eq!(played.uci, "e7e8q");
    assert_eq!(played.san, "e8=Q");
    assert_eq!(played.promotion, Some('q'));

    // Without either promotion spelling the move is not legal.
    assert!(matches!(
        apply_player_move("8/4P2k/8/8/8/8/8/4K3 w - - 0 1", "e7e8", None),
        Err(Error::IllegalMove)
    ));
}

#[test]
fn checkmating_reply_is_reported_as_won() {
    // Scholar's mate delivered by the player.
    let outcome = apply_player_move(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNBQK1NR w KQkq - 4 4",
        "h5f7",
        None,
    )
    .unwrap();
    assert!(outcome.status.is_checkmate);
    assert_eq!(
        outcome.status.winner,
        Some(chess_academy::session::GameWinner::White)
    );
    assert_eq!(outcome.status.result, Some("1-0"));
    assert_eq!(outcome.evaluation.raw(), -CHECKMATE_SCORE);
}

#[test]
fn unknown_difficulty_is_rejected_with_choices() {
    let err = compute_ai_move(STARTING_FEN, "grandmaster").unwrap_err();
    assert!(matches!(err, Error::UnknownDifficulty(_)));
    assert!(err.to_string().contains("intermediate"));

    // Labels are canonicalized before use.
    let reply = compute_ai_move(STARTING_FEN, "  ADVANCED ").unwrap();
    assert_eq!(reply.difficulty, "advanced");
}

#[test]
fn ai_move_annotations_are_consistent() {
    // The rook-hanging position: advanced play must take the rook, and
    // the annotation marks the capture and the check it gives.
    let reply = compute_ai_move("3r2k1/5pp1/7p/8/8/8/5PPP/3Q2K1 w - - 0 1", "advanced").unwrap();
    assert_eq!(reply.chosen.uci, "d1d8");
    assert_eq!(reply.chosen.san, "Qxd8+");
    assert!(reply.chosen.is_capture);
    assert!(reply.chosen.gives_check);
    // Checking moves read as unsafe to the 1-ply probe.
    assert!(!reply.chosen.is_safe);
    assert!(reply.status.is_check);
}
