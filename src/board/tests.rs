use super::*;
use crate::error::{GameError, MoveRejection};

fn play(moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(GameState::new(3, 3).unwrap(), |s, &(r, c)| {
        s.make_move(Pos::new(r, c)).unwrap()
    })
}

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
    assert_eq!(Player::X.symbol(), "X");
    assert_eq!(Player::O.symbol(), "O");
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(5), 13);
    assert_eq!(Pos::from_index(13, 5), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 3));
    assert!(Pos::is_valid(2, 2, 3));
    assert!(!Pos::is_valid(-1, 0, 3));
    assert!(!Pos::is_valid(0, 3, 3));
    assert_eq!(Pos::new(0, 0).offset(1, -1, 1, 3), None);
    assert_eq!(Pos::new(1, 1).offset(1, -1, 1, 3), Some(Pos::new(2, 0)));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_initial_state() {
    let state = GameState::new(3, 3).unwrap();
    assert!(!state.is_terminal());
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.legal_moves().len(), 9);
    assert_eq!(state.winner(), None);
    assert_eq!(state.last_move(), None);
}

#[test]
fn test_invalid_dimensions_rejected() {
    assert_eq!(
        GameState::new(3, 4),
        Err(GameError::InvalidDimensions { m: 3, k: 4 })
    );
    assert!(GameState::new(0, 0).is_err());
    assert!(GameState::new(3, 0).is_err());
    assert!(GameState::new(1, 1).is_ok());
}

#[test]
fn test_legal_moves_row_major() {
    let state = play(&[(1, 1), (0, 2)]);
    let moves = state.legal_moves();
    let mut sorted = moves.clone();
    sorted.sort();
    assert_eq!(moves, sorted);
    assert_eq!(moves.first(), Some(&Pos::new(0, 0)));
    assert!(!moves.contains(&Pos::new(1, 1)));
    assert!(!moves.contains(&Pos::new(0, 2)));
}

#[test]
fn test_make_move_leaves_parent_untouched() {
    let state = GameState::new(3, 3).unwrap();
    let next = state.make_move(Pos::new(0, 0)).unwrap();

    assert_eq!(next.current_player(), Player::O);
    assert_eq!(next.cell(Pos::new(0, 0)), Some(Player::X));
    assert!(state.is_empty(Pos::new(0, 0)));
    assert_eq!(state.legal_moves().len(), 9);
    assert_eq!(next.legal_moves().len(), 8);
}

#[test]
fn test_make_move_rejects_occupied_and_out_of_bounds() {
    let state = play(&[(0, 0)]);
    assert_eq!(
        state.make_move(Pos::new(0, 0)),
        Err(GameError::InvalidMove {
            pos: Pos::new(0, 0),
            reason: MoveRejection::Occupied,
        })
    );
    assert_eq!(
        state.make_move(Pos::new(3, 0)),
        Err(GameError::InvalidMove {
            pos: Pos::new(3, 0),
            reason: MoveRejection::OutOfBounds,
        })
    );
}

#[test]
fn test_horizontal_win() {
    let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.utility(), 1);
}

#[test]
fn test_vertical_win() {
    let state = play(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Player::X));
}

#[test]
fn test_diagonal_win() {
    let state = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Player::X));
}

#[test]
fn test_second_player_win() {
    let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Player::O));
    assert_eq!(state.utility(), -1);
}

#[test]
fn test_draw() {
    // X O X / X O O / O X X
    let state = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert!(state.is_terminal());
    assert_eq!(state.winner(), None);
    assert_eq!(state.utility(), 0);
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_cell_accounting() {
    let state = play(&[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(state.legal_moves().len() + state.occupied_count(), 9);
    assert_eq!(state.empty_count(), 6);
    assert_eq!(state.move_count(), 3);
}

#[test]
fn test_k_one_wins_immediately() {
    let state = GameState::new(2, 1).unwrap();
    let next = state.make_move(Pos::new(1, 1)).unwrap();
    assert!(next.is_terminal());
    assert_eq!(next.winner(), Some(Player::X));
}

#[test]
fn test_render() {
    let state = play(&[(0, 0), (1, 1)]);
    assert_eq!(state.to_string(), "X . .\n. O .\n. . .\n");
}
