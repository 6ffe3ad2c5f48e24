//! Integration tests for full game scenarios
//!
//! Each test plays real moves through the public API from the standard position (or a small
//! hand-built position) and checks the rules engine and the search end to end.

use chess_engine::api::{self, GameState};
use chess_engine::{Alliance, Move, MoveStatus, Piece, PieceKind, Position, PositionConfig};

/// Play `e2e4`-style moves from the standard position
fn play(moves: &[&str]) -> Position {
    let mut position = api::new_game();
    for text in moves {
        let mv = api::create_move_from_notation(&position, &text[..2], &text[2..4]).unwrap();
        assert!(!mv.is_null(), "{} is not a legal move", text);

        let transition = api::make_move(&position, &mv);
        assert_eq!(transition.status(), MoveStatus::Done, "{} was rejected", text);
        position = transition.into_position();
    }
    position
}

fn fools_mate_setup() -> Position {
    play(&["f2f3", "e7e5", "g2g4"])
}

#[test]
fn test_fools_mate_has_exactly_one_mating_reply() {
    //! After f3, e5, g4 Black has exactly one move that mates: Qd8-h4

    let position = fools_mate_setup();
    let black = position.current_player();
    assert_eq!(black.alliance(), Alliance::Black);

    let mating: Vec<Move> = black
        .legal_moves()
        .iter()
        .filter(|mv| {
            let transition = black.make_move(mv);
            transition.status().is_done()
                && transition.to_position().current_player().is_in_checkmate()
        })
        .copied()
        .collect();

    assert_eq!(mating.len(), 1);
    assert_eq!(mating[0].origin(), 3);
    assert_eq!(mating[0].destination(), 39);
    assert_eq!(mating[0].to_string(), "Qh4");
}

#[test]
fn test_fools_mate_found_by_depth_four_search() {
    let position = fools_mate_setup();

    let chosen = api::best_move(&position, 4).expect("black has moves");
    assert_eq!(chosen.moved_piece().map(|piece| piece.kind()), Some(PieceKind::Queen));
    assert_eq!(chosen.origin(), 3);
    assert_eq!(chosen.destination(), 39);

    let mated = api::make_move(&position, &chosen).into_position();
    assert_eq!(api::get_game_state(&mated), GameState::Checkmate);
    assert!(mated.current_player().is_in_check());
    assert!(!mated.current_player().is_in_stalemate());
}

#[test]
fn test_fools_mate_found_by_async_reply() {
    let position = fools_mate_setup();
    let chosen = futures_lite::future::block_on(api::reply(&position, 2)).expect("black has moves");
    assert_eq!(chosen.to_string(), "Qh4");
}

fn castle_config() -> PositionConfig {
    PositionConfig::new(Alliance::White)
        .with_piece(Piece::king(Alliance::White, 60, true, true))
        .with_piece(Piece::rook(Alliance::White, 63))
        .with_piece(Piece::pawn(Alliance::White, 52))
        .with_piece(Piece::king(Alliance::Black, 4, false, false))
}

#[test]
fn test_king_side_castle_allowed_on_clear_board() {
    let position = Position::new(castle_config()).unwrap();
    let castle = api::create_move(&position, 60, 62);

    assert!(matches!(castle, Move::KingSideCastle { .. }));
    let castled = api::make_move(&position, &castle).into_position();
    assert!(castled.white_player().is_castled());
    assert_eq!(castled.piece_at(61).map(|piece| piece.kind()), Some(PieceKind::Rook));
    assert!(!castled.white_player().is_king_side_castle_capable());
}

#[test]
fn test_king_side_castle_denied_through_attacked_square() {
    //! A black bishop on h3 covers f1, so White may not castle short

    let config = castle_config().with_piece(Piece::bishop(Alliance::Black, 47));
    let position = Position::new(config).unwrap();
    let white = position.white_player();

    assert!(!white.is_in_check());
    assert!(white.legal_moves().iter().all(|mv| !mv.is_castling()));
    assert!(api::create_move(&position, 60, 62).is_null());
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let config = PositionConfig::new(Alliance::Black)
        .with_piece(Piece::king(Alliance::Black, 7, false, false))
        .with_piece(Piece::queen(Alliance::White, 13).with_first_move(false))
        .with_piece(Piece::king(Alliance::White, 60, false, false));
    let position = Position::new(config).unwrap();
    let black = position.current_player();

    assert!(!black.is_in_check());
    assert!(black.is_in_stalemate());
    assert!(!black.is_in_checkmate());
    assert_eq!(api::get_game_state(&position), GameState::Stalemate);
    assert_eq!(api::best_move(&position, 2), None);
}

#[test]
fn test_en_passant_capture_on_next_ply() {
    let position = play(&["e2e4", "a7a6", "e4e5", "d7d5"]);
    let jumped = position.en_passant_pawn().expect("d5 just jumped");
    assert_eq!(jumped.square(), 27);

    let capture = api::create_move(&position, 28, 19);
    assert!(matches!(capture, Move::PawnEnPassantAttack { .. }));
    assert_eq!(capture.to_string(), "exd6");

    let after = api::make_move(&position, &capture).into_position();
    assert!(after.piece_at(27).is_none());
    assert_eq!(after.black_pieces().len(), 15);
    assert!(after.en_passant_pawn().is_none());
}

#[test]
fn test_en_passant_window_closes_after_one_ply() {
    let position = play(&["e2e4", "a7a6", "e4e5", "d7d5", "a2a3", "h7h6"]);

    assert!(position.en_passant_pawn().is_none());
    let stale = api::create_move(&position, 28, 19);
    assert!(stale.is_null(), "en passant is no longer available");
}

#[test]
fn test_promotion_through_api() {
    let config = PositionConfig::new(Alliance::Black)
        .with_piece(Piece::king(Alliance::Black, 4, false, false))
        .with_piece(Piece::pawn(Alliance::Black, 49).with_first_move(false))
        .with_piece(Piece::rook(Alliance::White, 56))
        .with_piece(Piece::king(Alliance::White, 63, false, false));
    let position = Position::new(config).unwrap();

    let capture = api::create_move_with_promotion(&position, 49, 56, |_| PieceKind::Rook);
    assert_eq!(capture.to_string(), "bxa1=R");

    let after = api::make_move(&position, &capture).into_position();
    let promoted = after.piece_at(56).expect("rook on a1");
    assert_eq!(promoted.kind(), PieceKind::Rook);
    assert_eq!(promoted.alliance(), Alliance::Black);
    assert_eq!(after.white_pieces().len(), 1);
    assert_eq!(after.side_to_move(), Alliance::White);
}
