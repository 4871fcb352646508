use crate::geometry::{Bounds, Vec2};

use super::arena::{CardArena, CardId};
use super::types::{RenderCard, EMPTY_SLOT_KEY};

/// Fraction of the card size by which successive cascading cards offset.
const CASCADE_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeDirection {
    Down,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PileKind {
    /// Cards fan out along an axis. With a fan limit only the trailing N
    /// cards step away from the anchor (a draw pile showing its last 3).
    Cascading {
        direction: CascadeDirection,
        fan_limit: Option<usize>,
    },
    /// All cards coincide with the anchor; only the top renders.
    Singular,
}

/// An ordered run of cards (bottom to top) anchored at a table position.
#[derive(Debug, Clone)]
pub struct CardPile {
    pub cards: Vec<CardId>,
    pub position: Vec2,
    kind: PileKind,
}

impl CardPile {
    pub fn cascading(direction: CascadeDirection) -> Self {
        Self {
            cards: Vec::new(),
            position: Vec2::ZERO,
            kind: PileKind::Cascading {
                direction,
                fan_limit: None,
            },
        }
    }

    pub fn cascading_fanned(direction: CascadeDirection, fan_limit: usize) -> Self {
        Self {
            cards: Vec::new(),
            position: Vec2::ZERO,
            kind: PileKind::Cascading {
                direction,
                fan_limit: Some(fan_limit),
            },
        }
    }

    pub fn singular() -> Self {
        Self {
            cards: Vec::new(),
            position: Vec2::ZERO,
            kind: PileKind::Singular,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    pub fn index_valid(&self, index: usize) -> bool {
        index < self.cards.len()
    }

    /// Hit-test region of the pile itself: a card-sized box at the anchor.
    pub fn contains_point(&self, point: Vec2, card_size: &Bounds) -> bool {
        card_size.translated(self.position).contains_point(point)
    }

    /// Recomputes every owned card's position from the anchor. Positions are
    /// set directly; callers wanting an animated arrival overwrite the card's
    /// position and rate afterwards.
    pub fn layout_cards(&self, arena: &mut CardArena, card_size: &Bounds) {
        match self.kind {
            PileKind::Cascading {
                direction,
                fan_limit,
            } => {
                let step = match direction {
                    CascadeDirection::Down => Vec2::new(0.0, -card_size.height() * CASCADE_STEP),
                    CascadeDirection::Right => Vec2::new(card_size.width() * CASCADE_STEP, 0.0),
                };

                let mut location = self.position;
                for (index, &id) in self.cards.iter().enumerate() {
                    arena.card_mut(id).position = location;
                    let fanned = match fan_limit {
                        None => true,
                        Some(limit) => self.cards.len() - index <= limit,
                    };
                    if fanned {
                        location += step;
                    }
                }
            }
            PileKind::Singular => {
                for &id in &self.cards {
                    arena.card_mut(id).position = self.position;
                }
            }
        }
    }

    /// Emits this pile's visible cards in back-to-front order, or an
    /// `"empty_card"` placeholder at the anchor when the pile is empty.
    pub fn generate_render_list(&self, arena: &CardArena, out: &mut Vec<RenderCard>) {
        if self.cards.is_empty() {
            out.push(RenderCard {
                key: EMPTY_SLOT_KEY.to_string(),
                position: self.position,
            });
            return;
        }

        match self.kind {
            PileKind::Cascading { .. } => {
                for &id in &self.cards {
                    let card = arena.card(id);
                    out.push(RenderCard {
                        key: card.render_key(),
                        position: card.position,
                    });
                }
            }
            PileKind::Singular => {
                if let Some(&id) = self.cards.last() {
                    let card = arena.card(id);
                    out.push(RenderCard {
                        key: card.render_key(),
                        position: card.position,
                    });
                }
            }
        }
    }

    /// Ranks strictly descend by one toward the pile top across the
    /// inclusive range.
    pub fn cards_in_order(&self, arena: &CardArena, start: usize, finish: usize) -> bool {
        self.assert_range(start, finish);

        for i in start..finish {
            let a = arena.card(self.cards[i]);
            let b = arena.card(self.cards[i + 1]);
            if a.rank != b.rank + 1 {
                return false;
            }
        }

        true
    }

    pub fn cards_same_color(&self, arena: &CardArena, start: usize, finish: usize) -> bool {
        self.assert_range(start, finish);

        let red = arena.card(self.cards[start]).color_red();
        self.cards[start + 1..=finish]
            .iter()
            .all(|&id| arena.card(id).color_red() == red)
    }

    pub fn cards_same_suit(&self, arena: &CardArena, start: usize, finish: usize) -> bool {
        self.assert_range(start, finish);

        let suit = arena.card(self.cards[start]).suit;
        self.cards[start + 1..=finish]
            .iter()
            .all(|&id| arena.card(id).suit == suit)
    }

    /// Strict red/black alternation through the inclusive range.
    pub fn cards_alternate_color(&self, arena: &CardArena, start: usize, finish: usize) -> bool {
        self.assert_range(start, finish);

        let mut previous: Option<bool> = None;
        for &id in &self.cards[start..=finish] {
            let red = arena.card(id).color_red();
            if previous == Some(red) {
                return false;
            }
            previous = Some(red);
        }

        true
    }

    // Range misuse is a caller bug, not a recoverable condition.
    fn assert_range(&self, start: usize, finish: usize) {
        assert!(start <= finish, "pile range start {start} > finish {finish}");
        assert!(
            self.index_valid(finish),
            "pile range finish {finish} out of bounds for {} cards",
            self.cards.len()
        );
    }
}
