//! Undo history integration tests.

use freecell_engine::{
    legal_moves, Board, Destination, Engine, EngineConfig, Intent, IntentOutcome, Move, Slot,
};

/// Play `n` moves, always taking the legal move at a rotating index.
/// Returns the board before each move plus the final board.
///
/// The last free cell is only ever filled from another cell, so there is
/// always a legal move left.
fn play(engine: &mut Engine, n: usize) -> Vec<Board> {
    let mut boards = vec![engine.board().clone()];
    for step in 0..n {
        let spare_cells = engine.board().empty_cell_count();
        let moves: Vec<Move> = legal_moves(engine.board())
            .into_iter()
            .filter(|mv| match (mv.from, mv.to) {
                (Slot::Cell(_), Destination::Slot(Slot::Cell(_))) => true,
                (_, Destination::Slot(Slot::Cell(_))) => spare_cells > 1,
                _ => true,
            })
            .collect();
        assert!(!moves.is_empty(), "stuck after {} moves", step);
        let mv = moves[(step * 7) % moves.len()];

        let outcome = match mv.to {
            Destination::Slot(to) => engine.handle(Intent::MoveAttempt { from: mv.from, to }),
            Destination::Foundation(_) => engine.handle(Intent::SendToFoundationFrom(mv.from)),
        };
        assert_eq!(outcome, IntentOutcome::Moved(mv));
        boards.push(engine.board().clone());
    }
    boards
}

/// Undo retraces every snapshot back to the deal.
#[test]
fn test_undo_round_trip_to_deal() {
    let mut engine = Engine::new(1_234_567);
    let boards = play(&mut engine, 30);

    for expected in boards.iter().rev().skip(1) {
        assert_eq!(engine.handle(Intent::Undo), IntentOutcome::Undone);
        assert_eq!(engine.board(), expected);
    }
    assert_eq!(engine.board(), &Board::deal(1_234_567));
    assert_eq!(engine.handle(Intent::Undo), IntentOutcome::Ignored);
    assert_eq!(engine.moves_made(), 0);
}

/// With capacity N, exactly N - 1 moves can be undone.
#[test]
fn test_bounded_history() {
    let config = EngineConfig::default().with_history_capacity(5);
    let mut engine = Engine::with_config(7_654_321, config).unwrap();
    let boards = play(&mut engine, 10);

    for expected in boards[6..10].iter().rev() {
        assert_eq!(engine.handle(Intent::Undo), IntentOutcome::Undone);
        assert_eq!(engine.board(), expected);
    }
    assert!(!engine.can_undo());
    assert_eq!(engine.handle(Intent::Undo), IntentOutcome::Ignored);
    assert_eq!(engine.board(), &boards[6]);
}

/// A move after undo starts a new line; the undone future is gone.
#[test]
fn test_move_after_undo_discards_future() {
    let mut engine = Engine::new(2_000_000);
    let boards = play(&mut engine, 3);

    engine.handle(Intent::Undo);
    engine.handle(Intent::Undo);
    assert_eq!(engine.board(), &boards[1]);

    // Branch: park a different cascade top
    let empty_cell = (0..4).find(|&i| engine.board().cell(i).is_none()).unwrap();
    let source = (0..8)
        .map(Slot::Cascade)
        .find(|&s| !engine.board().is_empty(s))
        .unwrap();
    assert!(engine.try_move(source, Slot::Cell(empty_cell)).changed_board());

    assert_eq!(engine.moves_made(), 2);
    engine.handle(Intent::Undo);
    assert_eq!(engine.board(), &boards[1]);
    engine.handle(Intent::Undo);
    assert_eq!(engine.board(), &boards[0]);
    assert!(!engine.can_undo());
}

/// Undo with nothing to undo is a no-op.
#[test]
fn test_undo_on_fresh_deal() {
    let mut engine = Engine::new(1_000_000);
    let before = engine.snapshot();
    assert_eq!(engine.handle(Intent::Undo), IntentOutcome::Ignored);
    assert_eq!(engine.snapshot(), before);
}
