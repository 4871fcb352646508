use super::types::Card;

/// Stable handle to a card in a [`CardArena`].
///
/// Piles, the moving pile and Spider's exiting list all refer to cards by
/// handle; the arena is the sole owner of card storage, so a card can hop
/// between piles without its storage moving underneath anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every card dealt for the current game. Cards are allocated in
/// batches at deal time and live until the next `clear`; they are never
/// freed mid-game, so handles stay valid for the whole game.
#[derive(Debug, Clone, Default)]
pub struct CardArena {
    cards: Vec<Card>,
}

impl CardArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, card: Card) -> CardId {
        let id = CardId(self.cards.len());
        self.cards.push(card);
        id
    }

    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.0]
    }

    pub fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.0]
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn tick_all(&mut self, delta_seconds: f64) {
        for card in &mut self.cards {
            card.tick(delta_seconds);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards.iter().enumerate().map(|(i, card)| (CardId(i), card))
    }
}
