use crate::geometry::{Bounds, Vec2};

use super::arena::{CardArena, CardId};
use super::pile::{CardPile, CascadeDirection};
use super::types::{Card, RenderCard, Suit};

/// Stable handle to a pile registered on a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PileId(usize);

#[derive(Debug, Clone)]
struct MovingPile {
    pile: CardPile,
    origin: PileId,
}

/// Shared state and move-transaction plumbing behind every solitaire
/// variant: the card arena, the pile registry, the transient moving pile and
/// the table geometry. Variants own a `Table` and layer their rules on top.
///
/// "A moving pile exists" is the one and only drag-in-progress flag; cards
/// leave their origin pile the instant a drag starts and land somewhere (the
/// target on commit, the origin on abort) the instant it ends.
#[derive(Debug, Clone)]
pub struct Table {
    pub(super) arena: CardArena,
    pub(super) piles: Vec<CardPile>,
    pub(super) tableau: Vec<PileId>,
    moving: Option<MovingPile>,
    grab_delta: Vec2,
    pub(super) world_extents: Bounds,
    pub(super) card_size: Bounds,
}

impl Table {
    pub fn new(world_extents: Bounds, card_size: Bounds) -> Self {
        Self {
            arena: CardArena::new(),
            piles: Vec::new(),
            tableau: Vec::new(),
            moving: None,
            grab_delta: Vec2::ZERO,
            world_extents,
            card_size,
        }
    }

    pub fn world_extents(&self) -> &Bounds {
        &self.world_extents
    }

    pub fn card_size(&self) -> &Bounds {
        &self.card_size
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.piles.clear();
        self.tableau.clear();
        self.moving = None;
        self.grab_delta = Vec2::ZERO;
    }

    /// Registers a pile that does not participate in default hit testing
    /// (foundations, free cells, a draw fan).
    pub fn add_pile(&mut self, pile: CardPile) -> PileId {
        let id = PileId(self.piles.len());
        self.piles.push(pile);
        id
    }

    /// Registers a tableau pile: included in `find_card_and_pile` /
    /// `find_empty_pile` sweeps and in the base render pass.
    pub fn add_tableau_pile(&mut self, pile: CardPile) -> PileId {
        let id = self.add_pile(pile);
        self.tableau.push(id);
        id
    }

    pub fn pile(&self, id: PileId) -> &CardPile {
        &self.piles[id.0]
    }

    pub fn pile_mut(&mut self, id: PileId) -> &mut CardPile {
        &mut self.piles[id.0]
    }

    pub fn card(&self, id: CardId) -> &Card {
        self.arena.card(id)
    }

    pub fn card_mut(&mut self, id: CardId) -> &mut Card {
        self.arena.card_mut(id)
    }

    pub fn card_at(&self, pile: PileId, offset: usize) -> &Card {
        self.arena.card(self.piles[pile.0].cards[offset])
    }

    pub fn total_cards(&self) -> usize {
        self.arena.len()
    }

    /// Allocates one full 52-card deck into the arena, face down, and
    /// returns the handles in suit-then-rank order. Callers shuffle.
    pub fn generate_deck(&mut self) -> Vec<CardId> {
        let mut deck = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                deck.push(self.arena.insert(Card::new(suit, rank)));
            }
        }
        deck
    }

    pub fn layout_pile(&mut self, id: PileId) {
        let card_size = self.card_size;
        let pile = &self.piles[id.0];
        pile.layout_cards(&mut self.arena, &card_size);
    }

    /// Top-down scan of one pile, so overlapping cascade cards resolve to
    /// the one drawn on top.
    pub fn find_card_in_pile(&self, point: Vec2, pile: PileId) -> Option<usize> {
        let pile = &self.piles[pile.0];
        for (index, &id) in pile.cards.iter().enumerate().rev() {
            if self.arena.card(id).contains_point(point, &self.card_size) {
                return Some(index);
            }
        }
        None
    }

    /// First hit across the tableau piles in registration order.
    pub fn find_card_and_pile(&self, point: Vec2) -> Option<(PileId, usize)> {
        for &pile_id in &self.tableau {
            if let Some(offset) = self.find_card_in_pile(point, pile_id) {
                return Some((pile_id, offset));
            }
        }
        None
    }

    /// Hit test restricted to empty tableau piles (their anchor boxes).
    pub fn find_empty_pile(&self, point: Vec2) -> Option<PileId> {
        for &pile_id in &self.tableau {
            let pile = &self.piles[pile_id.0];
            if pile.is_empty() && pile.contains_point(point, &self.card_size) {
                return Some(pile_id);
            }
        }
        None
    }

    pub fn is_card_moving(&self) -> bool {
        self.moving.is_some()
    }

    pub fn moving_pile(&self) -> Option<&CardPile> {
        self.moving.as_ref().map(|moving| &moving.pile)
    }

    /// Bottom card of the moving pile, the one legality checks compare
    /// against drop targets.
    pub fn moving_bottom(&self) -> Option<Card> {
        self.moving
            .as_ref()
            .and_then(|moving| moving.pile.cards.first())
            .map(|&id| *self.arena.card(id))
    }

    pub fn moving_len(&self) -> usize {
        self.moving
            .as_ref()
            .map(|moving| moving.pile.len())
            .unwrap_or(0)
    }

    /// Begins a drag: extracts `[offset, end)` from the pile into a
    /// transient cascading pile and records where it came from. The grab
    /// delta keeps the pile tracking the pointer at a constant offset
    /// instead of snapping to it.
    pub fn start_card_moving(&mut self, pile_id: PileId, offset: usize, grab_point: Vec2) {
        debug_assert!(self.moving.is_none());

        let grabbed = self.piles[pile_id.0].cards.split_off(offset);
        debug_assert!(!grabbed.is_empty());

        let mut pile = CardPile::cascading(CascadeDirection::Down);
        pile.position = self.arena.card(grabbed[0]).position;
        pile.cards = grabbed;

        self.grab_delta = pile.position - grab_point;
        self.moving = Some(MovingPile {
            pile,
            origin: pile_id,
        });
    }

    /// Tracks the pointer while a drag is in progress; no-op otherwise.
    pub fn manage_card_moving(&mut self, point: Vec2) {
        let card_size = self.card_size;
        let grab_delta = self.grab_delta;
        if let Some(moving) = self.moving.as_mut() {
            moving.pile.position = point + grab_delta;
            moving.pile.layout_cards(&mut self.arena, &card_size);
        }
    }

    /// Ends a drag, the only way one ends. On commit the moving cards are
    /// appended to `target` and the origin's newly exposed top card is
    /// flipped face up; otherwise everything returns to the origin
    /// unchanged.
    pub fn finish_card_moving(&mut self, target: Option<PileId>, commit: bool) {
        let Some(moving) = self.moving.take() else {
            return;
        };

        match (commit, target) {
            (true, Some(target)) => {
                self.piles[target.0].cards.extend(moving.pile.cards);
                self.layout_pile(target);

                if let Some(top) = self.piles[moving.origin.0].top() {
                    self.arena.card_mut(top).face_up = true;
                }
            }
            _ => {
                self.piles[moving.origin.0].cards.extend(moving.pile.cards);
                self.layout_pile(moving.origin);
            }
        }
    }

    /// Advances every card animation, wherever the card currently lives:
    /// regular piles, the moving pile or an exiting list.
    pub fn tick(&mut self, delta_seconds: f64) {
        self.arena.tick_all(delta_seconds);
    }

    pub fn render_pile(&self, id: PileId, out: &mut Vec<RenderCard>) {
        self.piles[id.0].generate_render_list(&self.arena, out);
    }

    /// Base render pass: every tableau pile bottom-to-top, then the moving
    /// pile on top of everything.
    pub fn render_tableau_and_moving(&self, out: &mut Vec<RenderCard>) {
        for &pile_id in &self.tableau {
            self.render_pile(pile_id, out);
        }

        if let Some(moving) = &self.moving {
            moving.pile.generate_render_list(&self.arena, out);
        }
    }
}
