//! Cross-solver properties on small boards.

use mnk::{
    AlphaBetaSolver, CenterFirstOrdering, DefaultOrdering, DepthLimitedSolver, GameState,
    HeuristicOrdering, MinimaxSolver, MoveOrdering, Player, Pos, Solver,
};

fn replay(m: usize, k: usize, moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(GameState::new(m, k).unwrap(), |state, &(r, c)| {
        state.make_move(Pos::new(r, c)).unwrap()
    })
}

/// X: (0,0) (0,1) (3,3); O: (3,0) (3,1) (2,1). X wins only at (0,2); anything
/// else leaves O more threats than X can block.
const UNIQUE_WIN_4X4: [(usize, usize); 6] = [(0, 0), (3, 0), (0, 1), (3, 1), (3, 3), (2, 1)];

/// Eight marks on a 4×4, k=3 board with no line yet, X to move.
const MIDGAME_4X4: [(usize, usize); 8] = [
    (1, 1),
    (2, 2),
    (1, 2),
    (1, 3),
    (2, 1),
    (3, 0),
    (0, 0),
    (3, 3),
];

fn assert_state_invariants(state: &GameState) {
    let cells = state.size() * state.size();
    assert_eq!(state.legal_moves().len() + state.occupied_count(), cells);
    assert_eq!(
        state.is_terminal(),
        state.winner().is_some() || state.legal_moves().is_empty()
    );
    if state.winner().is_some() {
        assert!(state.is_terminal());
    }
}

/// Let `solver` play both sides from `start`, checking every move it makes.
fn self_play(solver: &mut dyn Solver, start: GameState) -> GameState {
    let mut state = start;
    assert_state_invariants(&state);

    while !state.is_terminal() {
        let mover = state.current_player();
        let snapshot = state.clone();
        let mov = solver
            .find_best_move(&state)
            .unwrap_or_else(|| panic!("{} found no move on\n{state}", solver.name()));

        assert_eq!(state, snapshot, "{} mutated its input", solver.name());
        assert!(
            state.legal_moves().contains(&mov),
            "{} chose illegal {mov} on\n{state}",
            solver.name()
        );

        let next = state.make_move(mov).unwrap();
        assert_eq!(next.cell(mov), Some(mover));
        assert_eq!(next.current_player(), mover.opponent());
        assert_state_invariants(&next);
        state = next;
    }

    state
}

#[test]
fn minimax_and_alpha_beta_agree_on_empty_board() {
    let state = GameState::new(3, 3).unwrap();
    let mut minimax = MinimaxSolver::new();
    let mut alpha_beta = AlphaBetaSolver::new();

    let mm = minimax.search(&state);
    let ab = alpha_beta.search(&state);

    assert_eq!(mm.best_move, ab.best_move);
    assert_eq!(mm.score, 0);
    assert_eq!(ab.score, 0);
    assert!(ab.nodes <= mm.nodes);
}

#[test]
fn optimal_self_play_is_a_draw() {
    let mut solver = AlphaBetaSolver::new();
    let end = self_play(&mut solver, GameState::new(3, 3).unwrap());
    assert_eq!(end.winner(), None);
    assert_eq!(end.utility(), 0);
    assert_eq!(end.occupied_count(), 9);
}

#[test]
fn replayed_top_row_is_an_x_win() {
    let state = replay(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.utility(), 1);
}

#[test]
fn center_first_leads_with_center_on_5x5() {
    let state = GameState::new(5, 4).unwrap();
    let ordered = CenterFirstOrdering.order_moves(&state, &state.legal_moves());
    assert_eq!(ordered[0], Pos::new(2, 2));
    assert_eq!(ordered.len(), 25);
}

#[test]
fn orderings_agree_when_the_best_move_is_unique() {
    let scenarios = [
        // X completes the top row
        replay(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        // O must block the top row
        replay(3, 3, &[(0, 0), (1, 1), (0, 1)]),
        replay(4, 3, &UNIQUE_WIN_4X4),
    ];

    for state in scenarios {
        let plain = AlphaBetaSolver::with_ordering(Box::new(DefaultOrdering)).search(&state);
        let ordered =
            AlphaBetaSolver::with_ordering(Box::new(HeuristicOrdering::default())).search(&state);
        let centered = AlphaBetaSolver::with_ordering(Box::new(CenterFirstOrdering)).search(&state);

        assert_eq!(plain.best_move, ordered.best_move, "on\n{state}");
        assert_eq!(plain.best_move, centered.best_move, "on\n{state}");
        assert_eq!(plain.score, ordered.score);
        assert_eq!(plain.score, centered.score);
    }
}

#[test]
fn unique_win_on_4x4_is_found() {
    let state = replay(4, 3, &UNIQUE_WIN_4X4);
    let result = AlphaBetaSolver::new().search(&state);
    assert_eq!(result.best_move, Some(Pos::new(0, 2)));
    assert_eq!(result.score, 1);
}

#[test]
fn scores_are_from_the_root_movers_view() {
    // O to move; (0,2) blocks X and leaves O two threats
    let o_to_move = replay(3, 3, &[(0, 0), (1, 0), (2, 2), (1, 1), (0, 1)]);
    assert_eq!(o_to_move.current_player(), Player::O);

    let mm = MinimaxSolver::new().search(&o_to_move);
    let ab = AlphaBetaSolver::new().search(&o_to_move);
    assert_eq!(mm.best_move, Some(Pos::new(0, 2)));
    assert_eq!(mm.score, 1);
    assert_eq!(ab.best_move, mm.best_move);
    assert_eq!(ab.score, 1);

    // Same line one ply later: X is lost whatever it does
    let x_to_move = o_to_move.make_move(Pos::new(0, 2)).unwrap();
    assert_eq!(x_to_move.current_player(), Player::X);
    assert_eq!(MinimaxSolver::new().search(&x_to_move).score, -1);
    assert_eq!(AlphaBetaSolver::new().search(&x_to_move).score, -1);
}

#[test]
fn depth_limited_scores_leaves_for_the_root_mover() {
    // One ply each side: the root mover's evaluation decides for both X and O
    let x_root = GameState::new(3, 3).unwrap();
    let o_root = x_root.make_move(Pos::new(1, 1)).unwrap();

    let x_result = DepthLimitedSolver::new(0).search(&x_root);
    let o_result = DepthLimitedSolver::new(0).search(&o_root);

    assert_eq!(x_result.best_move, Some(Pos::new(1, 1)));
    assert!(x_result.score > 0);
    // O cannot undo the center; its best reply still scores below zero
    assert_eq!(o_result.best_move, Some(Pos::new(0, 0)));
    assert!(o_result.score < 0);
}

#[test]
fn every_solver_plays_legally_on_small_boards() {
    let starts = [
        GameState::new(3, 3).unwrap(),
        GameState::new(3, 2).unwrap(),
        replay(4, 3, &MIDGAME_4X4),
    ];

    for start in starts {
        let mut minimax = MinimaxSolver::new();
        let mut alpha_beta = AlphaBetaSolver::with_ordering(Box::new(HeuristicOrdering::default()));
        let mut bounded = DepthLimitedSolver::new(2);

        let solvers: [&mut dyn Solver; 3] = [&mut minimax, &mut alpha_beta, &mut bounded];
        for solver in solvers {
            let end = self_play(solver, start.clone());
            assert!(end.is_terminal());
        }
    }
}

#[test]
fn depth_limited_plays_legally_from_an_empty_4x4() {
    let mut solver = DepthLimitedSolver::new(2);
    let end = self_play(&mut solver, GameState::new(4, 3).unwrap());
    assert!(end.is_terminal());
}

#[test]
fn searching_never_touches_the_parent() {
    let state = replay(3, 3, &[(1, 1), (0, 0)]);
    let before = state.clone();

    MinimaxSolver::new().search(&state);
    AlphaBetaSolver::new().search(&state);
    DepthLimitedSolver::new(3).search(&state);

    assert_eq!(state, before);
    assert_eq!(state.legal_moves().len(), 7);
}

#[test]
fn finished_games_yield_no_move() {
    let won = replay(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let mut solvers: [Box<dyn Solver>; 3] = [
        Box::new(MinimaxSolver::new()),
        Box::new(AlphaBetaSolver::new()),
        Box::new(DepthLimitedSolver::new(2)),
    ];
    for solver in solvers.iter_mut() {
        let result = solver.search(&won);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
        // O to move in a game X has won
        assert_eq!(result.score, -1);
    }
}
