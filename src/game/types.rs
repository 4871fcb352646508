use super::rank_label;
use crate::geometry::{Bounds, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Klondike,
    Spider,
    Freecell,
}

impl GameMode {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "klondike" => Some(Self::Klondike),
            "spider" => Some(Self::Spider),
            "freecell" => Some(Self::Freecell),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Klondike => "klondike",
            Self::Spider => "spider",
            Self::Freecell => "freecell",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Klondike => "Klondike",
            Self::Spider => "Spider",
            Self::Freecell => "FreeCell",
        }
    }
}

/// Spider legality gate. Grabbed runs and automatic exits must be in
/// descending order at every level; Medium additionally requires one color,
/// Hard one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpiderDifficulty {
    Low,
    Medium,
    Hard,
}

impl SpiderDifficulty {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    pub fn foundation_index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// Render key for a face-down card.
pub const CARD_BACK_KEY: &str = "card_back";

/// Render key for the placeholder drawn at an empty pile's anchor.
pub const EMPTY_SLOT_KEY: &str = "empty_card";

/// A playing card plus its table presence: where it sits and where it is
/// animating to. `animation_rate` is world units per second; zero means the
/// card is at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
    pub position: Vec2,
    pub target_position: Vec2,
    pub animation_rate: f64,
}

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((1..=13).contains(&rank));
        Self {
            suit,
            rank,
            face_up: false,
            position: Vec2::ZERO,
            target_position: Vec2::ZERO,
            animation_rate: 0.0,
        }
    }

    pub fn color_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    /// Texture-lookup key consumed by the presentation layer, e.g.
    /// `"7_of_hearts"` or `"ace_of_spades"`; face-down cards all map to
    /// [`CARD_BACK_KEY`].
    pub fn render_key(&self) -> String {
        if !self.face_up {
            return CARD_BACK_KEY.to_string();
        }

        let rank = match self.rank {
            1 => "ace".to_string(),
            11 => "jack".to_string(),
            12 => "queen".to_string(),
            13 => "king".to_string(),
            other => other.to_string(),
        };

        format!("{}_of_{}", rank, self.suit.name())
    }

    /// Advances the card toward its animation target, clamping on the
    /// distance rather than the elapsed time so it can never overshoot.
    pub fn tick(&mut self, delta_seconds: f64) {
        if self.animation_rate <= 0.0 {
            return;
        }

        let delta = self.target_position - self.position;
        let distance = delta.length();
        let travel = self.animation_rate * delta_seconds;
        if distance <= travel {
            self.position = self.target_position;
            self.animation_rate = 0.0;
        } else {
            self.position += delta * (travel / distance);
        }
    }

    pub fn contains_point(&self, point: Vec2, card_size: &Bounds) -> bool {
        card_size.translated(self.position).contains_point(point)
    }
}

/// One entry of the engine's render list: a resolved texture key and a world
/// position, emitted back-to-front. The list is a plain snapshot; it stays
/// valid across later engine mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCard {
    pub key: String,
    pub position: Vec2,
}
