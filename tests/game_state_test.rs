//! Tests for the game state machine and time travel.

use tictactoe_timeline::{
    Board, GameInvariants, GameState, InvariantSet, Mark, PlayerLabels, Position, Square, Status,
    evaluate,
};

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index 0-8")
}

fn play(game: &mut GameState, indices: &[usize]) {
    for &index in indices {
        game.apply_move(pos(index));
    }
}

fn marks(board: &Board) -> Vec<Option<Mark>> {
    board.squares().iter().map(|s| s.mark()).collect()
}

#[test]
fn test_new_game_starts_empty() {
    let game = GameState::new();
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.next_mark(), Mark::X);
    assert_eq!(game.status(), Status::Next(Mark::X));
}

#[test]
fn test_scenario_column_win() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 3, 4, 6]);

    use Mark::{O, X};
    assert_eq!(
        marks(game.current_board()),
        vec![Some(X), Some(O), None, Some(X), Some(O), None, Some(X), None, None]
    );
    assert_eq!(game.current_step(), 5);
    assert_eq!(evaluate(game.current_board()), Some(X));
    assert_eq!(game.status(), Status::Winner(X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
    assert_eq!(
        PlayerLabels::default().status_text(game.status()),
        "Winner: Player 1 (X)"
    );
}

#[test]
fn test_scenario_occupied_click_is_noop() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 3]);
    assert_eq!(game.current_step(), 3);

    let before = game.clone();
    game.apply_move(pos(4));
    assert_eq!(game.current_step(), 4);

    let after_first = game.clone();
    game.apply_move(pos(4));
    assert_eq!(game, after_first);
    assert_ne!(before, after_first);
}

#[test]
fn test_click_on_cell_taken_at_current_step() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 3, 4]);
    game.jump_to(3);

    let before = game.clone();
    // Cell 1 is held by O at step 3.
    game.apply_move(pos(1));
    assert_eq!(game, before);
    assert_eq!(game.current_step(), 3);
}

#[test]
fn test_scenario_jump_then_branch() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 3, 4, 6]);
    let two_move_board = game.history().get(2).map(|e| e.board().clone());

    game.jump_to(2);
    assert_eq!(game.current_step(), 2);
    assert_eq!(game.history().len(), 6);
    assert_eq!(Some(game.current_board().clone()), two_move_board);
    assert_eq!(game.status(), Status::Next(Mark::X));

    game.apply_move(pos(8));
    assert_eq!(game.current_step(), 3);
    assert_eq!(game.history().len(), 4);
    assert_eq!(*game.current_entry().position(), Some(Position::BottomRight));
    assert_eq!(game.current_board().get(Position::BottomRight), Square::Occupied(Mark::X));
    assert!(game.current_board().is_empty(Position::MiddleLeft));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 3, 4, 6]);

    let finished = game.clone();
    game.apply_move(pos(8));
    assert_eq!(game, finished);
}

#[test]
fn test_scrubbing_recomputes_win_state() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 3, 4, 6]);

    game.jump_to(4);
    assert_eq!(game.status(), Status::Next(Mark::X));
    assert_eq!(game.winning_line(), None);

    game.jump_to(5);
    assert_eq!(game.status(), Status::Winner(Mark::X));
}

#[test]
fn test_scenario_full_board_is_draw() {
    let mut game = GameState::new();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.history().len(), 10);
    assert_eq!(evaluate(game.current_board()), None);
    assert_eq!(game.status(), Status::Draw);
    assert!(game.status().is_decided());
    assert_eq!(
        PlayerLabels::default().status_text(game.status()),
        "Draw: no moves left"
    );
}

#[test]
fn test_truncation_law_for_every_jump() {
    let full = {
        let mut game = GameState::new();
        play(&mut game, &[4, 0, 8, 2, 1]);
        game
    };

    for k in 0..full.current_step() {
        let mut game = full.clone();
        game.jump_to(k);
        let free = Position::ALL
            .into_iter()
            .find(|p| game.current_board().is_empty(*p))
            .expect("board not full");
        game.apply_move(free);

        assert_eq!(game.history().len(), k + 2, "jump to {k}");
        assert_eq!(&game.history().entries()[..=k], &full.history().entries()[..=k]);
    }
}

#[test]
fn test_next_mark_follows_step_parity() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8, 2, 1, 7]);

    for step in 0..game.history().len() {
        game.jump_to(step);
        let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.next_mark(), expected, "step {step}");
    }
}

#[test]
fn test_jump_outside_history_is_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[4]);

    game.jump_to(7);
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_move_descriptions() {
    let mut game = GameState::new();
    play(&mut game, &[0, 5, 7]);

    assert_eq!(game.move_description(0).as_deref(), Some("Go to game start"));
    assert_eq!(game.move_description(1).as_deref(), Some("Go to move #1 (1, 1)"));
    assert_eq!(game.move_description(2).as_deref(), Some("Go to move #2 (3, 2)"));
    assert_eq!(game.move_description(3).as_deref(), Some("Go to move #3 (2, 3)"));
    assert_eq!(game.move_description(4), None);
}

#[test]
fn test_move_list_flags_current_step() {
    let mut game = GameState::new();
    play(&mut game, &[0, 5, 7]);
    game.jump_to(1);

    let moves = game.moves();
    assert_eq!(moves.len(), 4);
    let selected: Vec<_> = moves.iter().filter(|m| m.selected).map(|m| m.step).collect();
    assert_eq!(selected, vec![1]);
    assert_eq!(moves[2].position, Some(Position::MiddleRight));
    assert_eq!(moves[0].position, None);
}

#[test]
fn test_view_matches_queries() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0]);
    let labels = PlayerLabels::new("Ana", "Bo");

    let view = game.view(&labels);
    assert_eq!(view.current_step, 2);
    assert_eq!(view.next_mark, Mark::X);
    assert_eq!(view.status, Status::Next(Mark::X));
    assert_eq!(view.status_text, "Next player: Ana (X)");
    assert_eq!(&view.board, game.current_board());
    assert_eq!(view.moves, game.moves());
}

#[test]
fn test_invariants_hold_through_play() {
    let mut game = GameState::new();
    for (index, jump) in [(4, None), (0, None), (8, Some(1)), (2, None), (6, Some(0)), (1, None)] {
        if let Some(step) = jump {
            game.jump_to(step);
        }
        game.apply_move(pos(index));
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}
