use crate::core::{Board, Move, Player};
use crate::logic::{
    apply_move, expand, find_moves, move_number, resolve_turn, EngineError, Expansion, GameState,
};
use rand::seq::SliceRandom;

#[test]
fn opening_has_four_moves_for_white() {
    let board = Board::initial();
    let moves = find_moves(&board, Player::White);
    assert_eq!(
        moves,
        vec![
            Move::new(2, 3),
            Move::new(3, 2),
            Move::new(4, 5),
            Move::new(5, 4),
        ]
    );
}

#[test]
fn opening_has_four_moves_for_black() {
    let board = Board::initial();
    let moves = find_moves(&board, Player::Black);
    assert_eq!(
        moves,
        vec![
            Move::new(2, 4),
            Move::new(3, 5),
            Move::new(4, 2),
            Move::new(5, 3),
        ]
    );
}

#[test]
fn applying_an_opening_move_flips_exactly_one_disc() {
    let board = Board::initial();
    let next = apply_move(&board, Move::new(2, 3), Player::White).unwrap();

    assert_eq!(next.occupied_count(), 5);
    let flat = next.flatten_inner();
    assert_eq!(flat.iter().filter(|&&v| v == 1).count(), 4);
    assert_eq!(flat.iter().filter(|&&v| v == -1).count(), 1);
    // Placement plus one flipped disc from the mover's perspective
    assert_eq!(next.material_sum(), 3);
}

#[test]
fn find_moves_is_sorted_and_deterministic() {
    let board = Board::initial();
    let moves = find_moves(&board, Player::White);
    assert!(moves.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(moves, find_moves(&board, Player::White));
}

#[test]
fn apply_rejects_moves_outside_the_legal_set() {
    let board = Board::initial();

    // Occupied cell
    let err = apply_move(&board, Move::new(3, 3), Player::White).unwrap_err();
    assert_eq!(err, EngineError::InvalidMove(Move::new(3, 3)));

    // Empty but capturing nothing
    let err = apply_move(&board, Move::new(1, 1), Player::White).unwrap_err();
    assert_eq!(err, EngineError::InvalidMove(Move::new(1, 1)));

    // Every legal move applies cleanly
    for mv in find_moves(&board, Player::White) {
        assert!(apply_move(&board, mv, Player::White).is_ok());
    }
}

#[test]
fn expand_encodes_a_single_pass() {
    // White has no capture line, Black can play (1, 4)
    let mut board = Board::initial();
    for row in 1..=6 {
        for col in 1..=6 {
            board.set(row, col, 0);
        }
    }
    board.set(1, 1, 1);
    board.set(1, 2, -1);
    board.set(1, 3, 1);

    assert!(find_moves(&board, Player::White).is_empty());

    let expansion = expand(&board, Player::White);
    assert_eq!(expansion.entries().len(), 1);
    match expansion {
        Expansion::Passed { mover, entries } => {
            assert_eq!(mover, Player::Black);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].0, Move::new(1, 4));
        }
        other => panic!("expected pass, got {:?}", other),
    }

    assert_eq!(
        resolve_turn(&board, Player::White),
        GameState::InProgress {
            to_move: Player::Black
        }
    );
}

#[test]
fn expand_on_terminal_position_returns_the_board_unchanged() {
    let mut board = Board::initial();
    for row in 1..=6 {
        for col in 1..=6 {
            board.set(row, col, 1);
        }
    }

    match expand(&board, Player::White) {
        Expansion::Terminal(ref unchanged) => assert_eq!(*unchanged, board),
        ref other => panic!("expected terminal, got {:?}", other),
    }
    assert_eq!(expand(&board, Player::White).boards(), vec![board.clone()]);
    assert_eq!(
        resolve_turn(&board, Player::White),
        GameState::Ended { material: 36 }
    );
}

#[test]
fn every_applied_move_captures_at_least_one_disc() {
    // Random playout; each ply must add one disc and flip at least one
    let mut rng = rand::thread_rng();
    let mut board = Board::initial();
    let mut state = resolve_turn(&board, Player::White);

    while let GameState::InProgress { to_move } = state {
        let moves = find_moves(&board, to_move);
        let mv = *moves.choose(&mut rng).unwrap();
        let before_own = count_sign(&board, to_move.sign());
        let before_occupied = board.occupied_count();

        board = apply_move(&board, mv, to_move).unwrap();

        assert_eq!(board.occupied_count(), before_occupied + 1);
        assert!(
            count_sign(&board, to_move.sign()) >= before_own + 2,
            "move {} captured nothing",
            mv
        );
        state = resolve_turn(&board, to_move.opponent());
    }
}

#[test]
fn random_games_terminate_within_32_plies() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let mut board = Board::initial();
        let mut state = resolve_turn(&board, Player::White);
        let mut plies = 0;

        while let GameState::InProgress { to_move } = state {
            let moves = find_moves(&board, to_move);
            let mv = *moves.choose(&mut rng).unwrap();
            board = apply_move(&board, mv, to_move).unwrap();
            plies += 1;
            assert!(plies <= 32, "game did not terminate");
            assert_eq!(move_number(&board), plies);
            state = resolve_turn(&board, to_move.opponent());
        }

        match state {
            GameState::Ended { material } => assert!((-36..=36).contains(&material)),
            _ => unreachable!(),
        }
    }
}

fn count_sign(board: &Board, sign: i8) -> usize {
    board.flatten_inner().iter().filter(|&&v| v == sign).count()
}
