//! Game-variant dispatch surface.
//!
//! Extension point for new variants:
//! 1. Add a concrete game type implementing [`SolitaireGame`].
//! 2. Register it in [`game_for_mode`].
//! 3. Ensure [`GameMode`] has matching metadata.

use crate::geometry::{Bounds, Vec2};

pub mod arena;
pub mod freecell;
pub mod klondike;
pub mod pile;
pub mod spider;
pub mod table;
pub mod types;


pub use arena::{CardArena, CardId};
pub use freecell::FreecellGame;
pub use klondike::KlondikeGame;
pub use pile::{CardPile, CascadeDirection};
pub use spider::SpiderGame;
pub use table::{PileId, Table};
pub use types::{
    Card, GameMode, RenderCard, SpiderDifficulty, Suit, CARD_BACK_KEY, EMPTY_SLOT_KEY,
};

/// Capability set every solitaire variant implements. The presentation
/// layer drives a game exclusively through these calls: gestures and key
/// events in, a render list out.
///
/// Illegal player actions are not errors. An illegal grab returns `false`
/// with no state change; an illegal drop aborts the drag and the cards
/// return to their origin. The release handler reports whether a
/// *committed* move happened.
pub trait SolitaireGame {
    fn mode(&self) -> GameMode;

    /// Resets all piles and deals a fresh game. Callable repeatedly.
    fn new_game(&mut self);

    /// Visible cards in back-to-front draw order. Non-mutating, safe to
    /// call at any time.
    fn generate_render_list(&self) -> Vec<RenderCard>;

    /// Returns whether a drag started.
    fn on_mouse_grab_at(&mut self, world_point: Vec2) -> bool;

    /// Returns whether a committed move occurred.
    fn on_mouse_release_at(&mut self, world_point: Vec2) -> bool;

    fn on_mouse_move(&mut self, world_point: Vec2);

    /// Player asked for more cards (stock click / deal button). Variants
    /// without a stock treat this as a no-op.
    fn on_cards_needed(&mut self);

    fn on_key_up(&mut self, key_code: u32) {
        let _ = key_code;
    }

    fn tick(&mut self, delta_seconds: f64);

    fn game_won(&self) -> bool;
}

/// Builds a freshly dealt game for the requested mode. Spider defaults to
/// its lowest difficulty; construct [`SpiderGame`] directly for more.
pub fn game_for_mode(
    mode: GameMode,
    world_extents: Bounds,
    card_size: Bounds,
    seed: u64,
) -> Box<dyn SolitaireGame> {
    match mode {
        GameMode::Klondike => Box::new(KlondikeGame::new(world_extents, card_size, seed)),
        GameMode::Spider => Box::new(SpiderGame::new(
            world_extents,
            card_size,
            SpiderDifficulty::Low,
            seed,
        )),
        GameMode::Freecell => Box::new(FreecellGame::new(world_extents, card_size, seed)),
    }
}

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}
