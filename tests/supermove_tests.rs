//! Supermove legality integration tests.
//!
//! Positions put a full King-to-Ace run on cascade 0 and a single card on
//! cascade 1, then fill a chosen number of other cascades and free cells
//! so the empty-slot counts are exact.

use freecell_engine::cards::standard_deck;
use freecell_engine::{
    plan_move, run_length, supermove_capacity, Board, Card, Engine, EngineConfig,
    IntentOutcome, Rank, Slot, Suit,
};

// =============================================================================
// Fixtures
// =============================================================================

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap())
}

/// K♠ Q♥ J♣ 10♦ 9♠ 8♥ 7♣ 6♦ 5♠ 4♥ 3♣ 2♦ A♠, bottom first.
fn full_run() -> Vec<Card> {
    let cycle = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
    (0..13u8)
        .map(|i| card(cycle[usize::from(i) % 4], 13 - i))
        .collect()
}

/// The `k`-th card from the top of `run`.
fn kth_from_top(run: &[Card], k: usize) -> Card {
    run[run.len() - k]
}

/// A card not in `run` that `target` can be stacked on.
fn acceptor_for(target: Card, run: &[Card]) -> Card {
    let rank = target.rank.successor().unwrap();
    Suit::ALL
        .into_iter()
        .filter(|s| s.color() != target.color())
        .map(|s| Card::new(s, rank))
        .find(|c| !run.contains(c))
        .unwrap()
}

/// Source run on cascade 0, `dest` on cascade 1 (or empty when `None`), and exactly
/// `empty_cascades` empty cascades and `empty_cells` empty cells.
fn position(run: &[Card], dest: Option<Card>, empty_cascades: usize, empty_cells: usize) -> Board {
    let mut fillers = standard_deck()
        .into_iter()
        .filter(|c| !run.contains(c) && Some(*c) != dest);

    let mut builder = Board::builder().cascade(0, run);
    if let Some(dest) = dest {
        builder = builder.cascade(1, &[dest]);
    }

    // Fill from the right so cascade 1 stays the (possibly empty) destination
    let fixed = if dest.is_some() { 2 } else { 1 };
    let filled = 8 - empty_cascades - fixed;
    for index in (8 - filled)..8 {
        builder = builder.cascade(index, &[fillers.next().unwrap()]);
    }
    for index in 0..(4 - empty_cells) {
        builder = builder.cell(index, fillers.next().unwrap());
    }

    let board = builder.build().unwrap();
    assert_eq!(board.empty_cell_count(), empty_cells);
    assert_eq!(board.empty_cascade_count(), empty_cascades);
    board
}

/// Empty slot counts reachable with a non-empty destination.
const NON_EMPTY_CASES: [(usize, usize); 10] = [
    (0, 0),
    (0, 1),
    (0, 3),
    (0, 4),
    (1, 0),
    (1, 2),
    (1, 4),
    (2, 0),
    (2, 1),
    (3, 0),
];

// =============================================================================
// Capacity boundary
// =============================================================================

/// Moving exactly (c + 1) * 2^e cards onto a non-empty cascade succeeds.
#[test]
fn test_exact_capacity_succeeds() {
    let run = full_run();
    for (e, c) in NON_EMPTY_CASES {
        let capacity = supermove_capacity(c, e, false);
        assert_eq!(capacity, (c + 1) << e);

        let dest = acceptor_for(kth_from_top(&run, capacity), &run);
        let board = position(&run, Some(dest), e, c);

        let mv = plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into())
            .unwrap_or_else(|| panic!("e={} c={} capacity={} should move", e, c, capacity));
        assert_eq!(mv.count, capacity, "e={} c={}", e, c);
    }
}

/// One card beyond capacity fails even though the run is long enough.
#[test]
fn test_one_over_capacity_fails() {
    let run = full_run();
    for (e, c) in NON_EMPTY_CASES {
        let capacity = supermove_capacity(c, e, false);
        assert!(run_length(&run) > capacity);

        let dest = acceptor_for(kth_from_top(&run, capacity + 1), &run);
        let board = position(&run, Some(dest), e, c);

        assert_eq!(
            plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()),
            None,
            "e={} c={} capacity={}",
            e,
            c,
            capacity
        );
    }
}

// =============================================================================
// Empty destination
// =============================================================================

/// An empty destination does not count as a helper cascade.
#[test]
fn test_empty_destination_capacity() {
    let run = full_run();

    // Destination is the only empty cascade: c + 1
    let board = position(&run, None, 1, 2);
    let mv = plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()).unwrap();
    assert_eq!(mv.count, 3);

    // Two empty cascades, one of them the destination: (c + 1) * 2
    let board = position(&run, None, 2, 2);
    let mv = plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()).unwrap();
    assert_eq!(mv.count, 6);

    // Capacity exceeds the run: the whole run moves
    let board = position(&run, None, 4, 4);
    let mv = plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()).unwrap();
    assert_eq!(mv.count, 13);
}

/// Onto an empty cascade the largest legal block is taken, not the smallest.
#[test]
fn test_empty_destination_takes_largest_block() {
    let run = full_run();
    let board = position(&run, None, 1, 4);
    let mv = plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()).unwrap();
    assert_eq!(mv.count, 5);
}

// =============================================================================
// Run shape
// =============================================================================

/// A broken run cannot move as a block, whatever the capacity.
#[test]
fn test_non_alternating_run_rejected() {
    // 6♠ 5♣: same color, so only 5♣ is a run
    let source = [card(Suit::Spades, 6), card(Suit::Clubs, 5)];
    let dest = card(Suit::Hearts, 7);
    let board = Board::builder()
        .cascade(0, &source)
        .cascade(1, &[dest])
        .build()
        .unwrap();

    assert_eq!(run_length(&source), 1);
    assert_eq!(plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()), None);
}

/// A gap in rank breaks the run too.
#[test]
fn test_rank_gap_rejected() {
    let source = [card(Suit::Spades, 7), card(Suit::Hearts, 5)];
    let dest = card(Suit::Diamonds, 8);
    let board = Board::builder()
        .cascade(0, &source)
        .cascade(1, &[dest])
        .build()
        .unwrap();

    assert_eq!(plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into()), None);
}

// =============================================================================
// Color stacking
// =============================================================================

/// Same color one rank lower is refused; opposite color is accepted.
#[test]
fn test_color_stacking_rule() {
    for suit in Suit::ALL {
        for rank in 1..13u8 {
            let onto = card(suit, rank + 1);
            for mover_suit in Suit::ALL {
                let mover = card(mover_suit, rank);
                let board = Board::builder()
                    .cascade(0, &[mover])
                    .cascade(1, &[onto])
                    .build()
                    .unwrap();
                let planned = plan_move(&board, Slot::Cascade(0), Slot::Cascade(1).into());

                if mover_suit.color() == suit.color() {
                    assert_eq!(planned, None, "{} onto {}", mover, onto);
                } else {
                    assert_eq!(planned.map(|m| m.count), Some(1), "{} onto {}", mover, onto);
                }
            }
        }
    }
}

// =============================================================================
// Through the engine
// =============================================================================

/// A supermove executes as one undoable step.
#[test]
fn test_supermove_is_one_history_step() {
    let run = full_run();
    let dest = acceptor_for(kth_from_top(&run, 4), &run);
    let board = position(&run, Some(dest), 1, 1);
    let mut engine = Engine::from_board(board.clone(), EngineConfig::default()).unwrap();

    let outcome = engine.try_move(Slot::Cascade(0), Slot::Cascade(1));
    let IntentOutcome::Moved(mv) = outcome else {
        panic!("expected a move, got {:?}", outcome);
    };
    assert_eq!(mv.count, 4);
    assert_eq!(engine.board().cascade(0).unwrap().len(), 9);
    assert_eq!(engine.board().cascade(1).unwrap().len(), 5);
    assert_eq!(engine.board().card_count(), board.card_count());

    engine.undo();
    assert_eq!(engine.board(), &board);
}
