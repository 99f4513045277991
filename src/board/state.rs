//! Board state: 8 cascades, 4 free cells, 4 foundations.
//!
//! ## Reading
//!
//! Renderers and the rules module read through `peek_top`, `cascade`,
//! `cell` and `foundation_rank`. None of these mutate.
//!
//! ## Mutating
//!
//! `remove_top`, `append` and `accept` are crate-private. Only the move
//! executor calls them, and only after the validator has approved the move.
//!
//! ## Conservation
//!
//! A dealt board holds every card of the deck exactly once, and moves only
//! relocate cards. Hand-built boards (see `BoardBuilder`) may hold a partial
//! deck but never a duplicate. Deserialized boards pass through the same
//! checks as `BoardBuilder::build`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::slot::Slot;
use crate::cards::{deal_order, Card, Rank, Suit};
use crate::core::{CASCADE_COUNT, DECK_SIZE, FOUNDATION_COUNT, FREE_CELL_COUNT, MAX_CASCADE_LEN};
use crate::error::LayoutError;

/// A cascade, bottom card first.
///
/// SmallVec keeps the longest possible cascade inline so cloning a board
/// never allocates.
pub type Cascade = SmallVec<[Card; MAX_CASCADE_LEN]>;

/// The full board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    cascades: [Cascade; CASCADE_COUNT],
    cells: [Option<Card>; FREE_CELL_COUNT],
    /// Highest rank accepted so far, indexed by `Suit::index`.
    foundations: [Option<Rank>; FOUNDATION_COUNT],
}

/// Unchecked serialized form of a `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    cascades: [Vec<Card>; CASCADE_COUNT],
    cells: [Option<Card>; FREE_CELL_COUNT],
    foundations: [Option<Rank>; FOUNDATION_COUNT],
}

impl TryFrom<BoardRepr> for Board {
    type Error = LayoutError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let mut builder = Board::builder();
        for (index, cards) in repr.cascades.iter().enumerate() {
            builder = builder.cascade(index, cards);
        }
        for (index, card) in repr.cells.into_iter().enumerate() {
            if let Some(card) = card {
                builder = builder.cell(index, card);
            }
        }
        for (suit, top) in Suit::ALL.into_iter().zip(repr.foundations) {
            if let Some(top) = top {
                builder = builder.foundation(suit, top);
            }
        }
        builder.build()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with nothing on it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cascades: Default::default(),
            cells: [None; FREE_CELL_COUNT],
            foundations: [None; FOUNDATION_COUNT],
        }
    }

    /// Deal a shuffled deck round-robin onto the cascades.
    ///
    /// Cascades 0..4 get seven cards, 4..8 get six.
    #[must_use]
    pub fn deal(seed: u64) -> Self {
        let mut board = Self::empty();
        for (i, card) in deal_order(seed).into_iter().enumerate() {
            board.cascades[i % CASCADE_COUNT].push(card);
        }
        board
    }

    /// Start building a hand-made position.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    // === Slots ===

    /// The addressable card of a slot: a cell's card or a cascade's top card.
    #[must_use]
    pub fn peek_top(&self, slot: Slot) -> Option<Card> {
        match slot {
            Slot::Cell(i) => self.cells.get(i).copied().flatten(),
            Slot::Cascade(i) => self.cascades.get(i)?.last().copied(),
        }
    }

    /// True if the slot holds no card. Out-of-range slots count as empty.
    #[must_use]
    pub fn is_empty(&self, slot: Slot) -> bool {
        self.peek_top(slot).is_none()
    }

    /// Cards in a cascade, bottom first.
    #[must_use]
    pub fn cascade(&self, index: usize) -> Option<&[Card]> {
        self.cascades.get(index).map(|c| c.as_slice())
    }

    /// Iterate all cascades in order.
    pub fn cascades(&self) -> impl Iterator<Item = &[Card]> {
        self.cascades.iter().map(|c| c.as_slice())
    }

    /// Contents of a free cell.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Card> {
        self.cells.get(index).copied().flatten()
    }

    /// All free cells in order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Card>; FREE_CELL_COUNT] {
        &self.cells
    }

    /// Number of cascades with no cards.
    #[must_use]
    pub fn empty_cascade_count(&self) -> usize {
        self.cascades.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of free cells with no card.
    #[must_use]
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    // === Foundations ===

    /// Highest rank on a suit's foundation, `None` if empty.
    #[must_use]
    pub fn foundation_rank(&self, suit: Suit) -> Option<Rank> {
        self.foundations[suit.index()]
    }

    /// Foundation tops in suit order.
    #[must_use]
    pub fn foundations(&self) -> &[Option<Rank>; FOUNDATION_COUNT] {
        &self.foundations
    }

    // === Whole-board queries ===

    /// Iterate every card on the board, foundations included.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        let foundation_cards = Suit::ALL.into_iter().flat_map(move |suit| {
            let top = self.foundation_rank(suit).map_or(0, Rank::value);
            Rank::all()
                .take_while(move |r| r.value() <= top)
                .map(move |rank| Card::new(suit, rank))
        });

        self.cascades
            .iter()
            .flat_map(|c| c.iter().copied())
            .chain(self.cells.iter().flatten().copied())
            .chain(foundation_cards)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// Check that the board holds the full deck exactly once.
    pub fn verify_conservation(&self) -> Result<(), LayoutError> {
        let seen = unique_cards(self.cards())?;
        if seen.len() != DECK_SIZE {
            return Err(LayoutError::MissingCards {
                missing: DECK_SIZE - seen.len(),
            });
        }
        Ok(())
    }

    // === Mutation (move executor only) ===

    /// Take `count` cards off the top of a slot, preserving their order.
    ///
    /// Callers must have checked that the slot holds at least `count` cards.
    pub(crate) fn remove_top(&mut self, slot: Slot, count: usize) -> Cascade {
        match slot {
            Slot::Cell(i) => self.cells[i].take().into_iter().collect(),
            Slot::Cascade(i) => {
                let cascade = &mut self.cascades[i];
                let split = cascade.len() - count;
                cascade.drain(split..).collect()
            }
        }
    }

    /// Place cards on a slot, bottom card first.
    pub(crate) fn append(&mut self, slot: Slot, cards: &[Card]) {
        match slot {
            Slot::Cell(i) => {
                debug_assert!(self.cells[i].is_none() && cards.len() == 1);
                self.cells[i] = cards.first().copied();
            }
            Slot::Cascade(i) => {
                let cascade = &mut self.cascades[i];
                assert!(
                    cascade.len() + cards.len() <= MAX_CASCADE_LEN,
                    "cascade {} would exceed {} cards",
                    i,
                    MAX_CASCADE_LEN
                );
                cascade.extend_from_slice(cards);
            }
        }
    }

    /// Put a card on its suit's foundation.
    pub(crate) fn accept(&mut self, card: Card) {
        debug_assert_eq!(
            self.foundation_rank(card.suit).and_then(Rank::successor),
            if card.rank == Rank::ACE { None } else { Some(card.rank) },
        );
        self.foundations[card.suit.index()] = Some(card.rank);
    }
}

fn unique_cards(cards: impl Iterator<Item = Card>) -> Result<FxHashSet<Card>, LayoutError> {
    let mut seen = FxHashSet::default();
    for card in cards {
        if !seen.insert(card) {
            return Err(LayoutError::DuplicateCard(card));
        }
    }
    Ok(seen)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const BLANK: &str = " .. ";

        for cell in &self.cells {
            match cell {
                Some(card) => write!(f, "{} ", card)?,
                None => f.write_str(BLANK)?,
            }
        }
        f.write_str("| ")?;
        for suit in Suit::ALL {
            match self.foundation_rank(suit) {
                Some(rank) => write!(f, "{} ", Card::new(suit, rank))?,
                None => f.write_str(BLANK)?,
            }
        }
        writeln!(f)?;

        let depth = self.cascades.iter().map(|c| c.len()).max().unwrap_or(0);
        for row in 0..depth {
            for cascade in &self.cascades {
                match cascade.get(row) {
                    Some(card) => write!(f, "{} ", card)?,
                    None => f.write_str("    ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for hand-made positions.
///
/// ```
/// use freecell_engine::board::{Board, Slot};
/// use freecell_engine::cards::{Card, Rank, Suit};
///
/// let board = Board::builder()
///     .cascade(0, &[Card::new(Suit::Spades, Rank::SEVEN)])
///     .cell(1, Card::new(Suit::Hearts, Rank::SIX))
///     .foundation(Suit::Clubs, Rank::TWO)
///     .build()
///     .unwrap();
///
/// assert_eq!(board.peek_top(Slot::Cell(1)), Some(Card::new(Suit::Hearts, Rank::SIX)));
/// assert_eq!(board.card_count(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    cascades: Vec<(usize, Vec<Card>)>,
    cells: Vec<(usize, Card)>,
    foundations: Vec<(Suit, Rank)>,
}

impl BoardBuilder {
    /// Set a cascade's cards, bottom first.
    #[must_use]
    pub fn cascade(mut self, index: usize, cards: &[Card]) -> Self {
        self.cascades.push((index, cards.to_vec()));
        self
    }

    /// Put a card in a free cell.
    #[must_use]
    pub fn cell(mut self, index: usize, card: Card) -> Self {
        self.cells.push((index, card));
        self
    }

    /// Fill a suit's foundation from Ace up to `top`.
    #[must_use]
    pub fn foundation(mut self, suit: Suit, top: Rank) -> Self {
        self.foundations.push((suit, top));
        self
    }

    /// Build the board, rejecting duplicates and impossible slots.
    pub fn build(self) -> Result<Board, LayoutError> {
        let mut board = Board::empty();

        for (index, cards) in self.cascades {
            let cascade = board
                .cascades
                .get_mut(index)
                .ok_or(LayoutError::NoSuchSlot { what: "cascade", index })?;
            if cards.len() > MAX_CASCADE_LEN {
                return Err(LayoutError::CascadeOverflow {
                    index,
                    len: cards.len(),
                    capacity: MAX_CASCADE_LEN,
                });
            }
            *cascade = Cascade::from_vec(cards);
        }

        for (index, card) in self.cells {
            let cell = board
                .cells
                .get_mut(index)
                .ok_or(LayoutError::NoSuchSlot { what: "free cell", index })?;
            *cell = Some(card);
        }

        for (suit, top) in self.foundations {
            board.foundations[suit.index()] = Some(top);
        }

        unique_cards(board.cards())?;
        Ok(board)
    }
}
