//! Invariants checked over every position reached in short deterministic game walks

use std::collections::HashSet;

use chess_engine::board::{column, row};
use chess_engine::move_gen::calculate_moves;
use chess_engine::{api, Alliance, Piece, PieceKind, Position, PositionConfig, Square};

/// Walk `plies` moves, picking the playable move at a rotating index so different walks diverge
fn walk(seed: usize, plies: usize) -> Vec<Position> {
    let mut positions = vec![api::new_game()];
    for ply in 0..plies {
        let Some(current) = positions.last() else {
            break;
        };
        let player = current.current_player();
        let playable: Vec<Position> = player
            .legal_moves()
            .iter()
            .map(|mv| player.make_move(mv))
            .filter(|transition| transition.status().is_done())
            .map(|transition| transition.into_position())
            .collect();
        if playable.is_empty() {
            break;
        }
        let next = playable[(seed * 31 + ply * 17) % playable.len()].clone();
        positions.push(next);
    }
    positions
}

fn walks() -> impl Iterator<Item = Position> {
    (0..4).flat_map(|seed| walk(seed, 24))
}

#[test]
fn test_no_square_is_claimed_twice() {
    for position in walks() {
        let white: HashSet<Square> = position.white_pieces().iter().map(Piece::square).collect();
        let black: HashSet<Square> = position.black_pieces().iter().map(Piece::square).collect();

        assert!(white.len() + black.len() <= 64);
        assert_eq!(white.len(), position.white_pieces().len());
        assert!(white.is_disjoint(&black));
    }
}

#[test]
fn test_apply_flips_turn_and_changes_count_only_on_capture() {
    for position in walks() {
        let player = position.current_player();
        let before = position.all_pieces().count();

        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if !transition.status().is_done() {
                continue;
            }
            let after = transition.to_position();
            assert_eq!(after.side_to_move(), position.side_to_move().opponent());

            let expected = if mv.is_attack() { before - 1 } else { before };
            assert_eq!(after.all_pieces().count(), expected, "{}", mv);
        }
    }
}

#[test]
fn test_queries_are_stable() {
    for position in walks() {
        let player = position.current_player();
        assert_eq!(player.is_in_check(), player.is_in_check());
        assert_eq!(player.is_in_checkmate(), player.is_in_checkmate());
        assert_eq!(player.is_in_stalemate(), player.is_in_stalemate());
        assert_eq!(api::get_game_state(&position), api::get_game_state(&position));
    }
}

#[test]
fn test_en_passant_pawn_only_survives_one_ply() {
    for seed in 0..4 {
        let positions = walk(seed, 24);
        for pair in positions.windows(2) {
            if let (Some(first), Some(second)) = (pair[0].en_passant_pawn(), pair[1].en_passant_pawn()) {
                assert_ne!(first, second, "en passant pawn carried over a ply");
            }
        }
    }
}

#[test]
fn test_sliders_never_wrap_around_the_board() {
    //! Every destination of a lone slider must lie on one of its lines

    for square in 0..64 as Square {
        let (white_king, black_king) = if square == 0 || square == 63 { (7, 56) } else { (63, 0) };
        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            let piece = Piece::new(kind, Alliance::White, square);
            let config = PositionConfig::new(Alliance::White)
                .with_piece(piece)
                .with_piece(Piece::king(Alliance::White, white_king, false, false))
                .with_piece(Piece::king(Alliance::Black, black_king, false, false));
            let position = Position::new(config).unwrap();

            for mv in calculate_moves(&piece, &position) {
                let destination = mv.destination();
                let columns = (column(destination) - column(square)).abs();
                let rows = (row(destination) - row(square)).abs();
                let straight = columns == 0 || rows == 0;
                let diagonal = columns == rows;
                let on_line = match kind {
                    PieceKind::Bishop => diagonal,
                    PieceKind::Rook => straight,
                    _ => straight || diagonal,
                };
                assert!(on_line, "{:?} on {} reached {}", kind, square, destination);
            }
        }
    }
}
