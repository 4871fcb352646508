use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geometry::{Bounds, Vec2};

use super::arena::CardId;
use super::pile::{CardPile, CascadeDirection};
use super::table::{PileId, Table};
use super::types::{GameMode, RenderCard};
use super::SolitaireGame;

/// How many waste cards fan out face-up next to the stock.
const DRAW_FAN: usize = 3;

const TABLEAU_PILES: usize = 7;
const FOUNDATION_PILES: usize = 4;

/// Klondike: seven-pile triangular tableau, four suit foundations, and a
/// three-card draw fan fed from an off-table stock.
#[derive(Debug, Clone)]
pub struct KlondikeGame {
    pub(super) table: Table,
    rng: StdRng,
    pub(super) stock: Vec<CardId>,
    pub(super) draw_pile: Option<PileId>,
    pub(super) foundations: Vec<PileId>,
}

impl KlondikeGame {
    pub fn new(world_extents: Bounds, card_size: Bounds, seed: u64) -> Self {
        let mut game = Self {
            table: Table::new(world_extents, card_size),
            rng: StdRng::seed_from_u64(seed),
            stock: Vec::new(),
            draw_pile: None,
            foundations: Vec::new(),
        };
        game.new_game();
        game
    }

    pub fn new_shuffled(world_extents: Bounds, card_size: Bounds) -> Self {
        Self::new(world_extents, card_size, rand::thread_rng().gen())
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }
}

impl SolitaireGame for KlondikeGame {
    fn mode(&self) -> GameMode {
        GameMode::Klondike
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.stock.clear();
        self.foundations.clear();
        self.draw_pile = None;

        let mut deck = self.table.generate_deck();
        deck.shuffle(&mut self.rng);

        let world = *self.table.world_extents();
        let card = *self.table.card_size();
        let columns = (TABLEAU_PILES - 1) as f64;

        for i in 0..FOUNDATION_PILES {
            let mut pile = CardPile::singular();
            pile.position = Vec2::new(
                world.min.x + ((i + 3) as f64 / columns) * (world.width() - card.width()),
                world.min.y + world.height() - card.height() * 1.2,
            );
            let id = self.table.add_pile(pile);
            self.foundations.push(id);
        }

        for i in 0..TABLEAU_PILES {
            let mut pile = CardPile::cascading(CascadeDirection::Down);
            pile.position = Vec2::new(
                world.min.x + (i as f64 / columns) * (world.width() - card.width()),
                world.min.y + world.height() - card.height() * 2.4,
            );
            for j in 0..=i {
                let id = deck.pop().expect("a fresh deck covers the tableau deal");
                self.table.card_mut(id).face_up = j == i;
                pile.cards.push(id);
            }
            let id = self.table.add_tableau_pile(pile);
            self.table.layout_pile(id);
        }

        let mut draw = CardPile::cascading_fanned(CascadeDirection::Right, DRAW_FAN);
        draw.position = Vec2::new(
            world.min.x,
            world.min.y + world.height() - card.height() * 1.2,
        );
        self.draw_pile = Some(self.table.add_pile(draw));

        self.stock = deck;
        debug!(
            "dealt {} game, {} cards in stock",
            self.mode().label(),
            self.stock.len()
        );
    }

    fn generate_render_list(&self) -> Vec<RenderCard> {
        let mut out = Vec::new();
        for &id in &self.foundations {
            self.table.render_pile(id, &mut out);
        }
        if let Some(draw_id) = self.draw_pile {
            self.table.render_pile(draw_id, &mut out);
        }
        self.table.render_tableau_and_moving(&mut out);
        out
    }

    fn on_mouse_grab_at(&mut self, world_point: Vec2) -> bool {
        if self.table.is_card_moving() {
            return false;
        }

        if let Some((pile_id, offset)) = self.table.find_card_and_pile(world_point) {
            // Everything above a face-up card rides along implicitly.
            if self.table.card_at(pile_id, offset).face_up {
                self.table.start_card_moving(pile_id, offset, world_point);
                return true;
            }
            return false;
        }

        if let Some(draw_id) = self.draw_pile {
            if let Some(offset) = self.table.find_card_in_pile(world_point, draw_id) {
                // Only the exposed end of the fan is playable.
                if offset + 1 == self.table.pile(draw_id).len() {
                    self.table.start_card_moving(draw_id, offset, world_point);
                    return true;
                }
                return false;
            }
        }

        let card_size = *self.table.card_size();
        for index in 0..self.foundations.len() {
            let id = self.foundations[index];
            let pile = self.table.pile(id);
            if pile.contains_point(world_point, &card_size) && !pile.is_empty() {
                let offset = pile.len() - 1;
                self.table.start_card_moving(id, offset, world_point);
                return true;
            }
        }

        false
    }

    fn on_mouse_release_at(&mut self, world_point: Vec2) -> bool {
        if !self.table.is_card_moving() {
            return false;
        }
        let Some(bottom) = self.table.moving_bottom() else {
            return false;
        };
        let card_size = *self.table.card_size();

        let mut target: Option<PileId> = None;
        let mut commit = false;

        if let Some((pile_id, offset)) = self.table.find_card_and_pile(world_point) {
            let card = self.table.card_at(pile_id, offset);
            if card.color_red() != bottom.color_red() && card.rank == bottom.rank + 1 {
                target = Some(pile_id);
                commit = true;
            }
        } else if let Some(empty_id) = self.table.find_empty_pile(world_point) {
            if bottom.rank == 13 {
                target = Some(empty_id);
                commit = true;
            }
        } else if self.table.moving_len() == 1 {
            for &id in &self.foundations {
                let pile = self.table.pile(id);
                if !pile.contains_point(world_point, &card_size) {
                    continue;
                }
                let accepts = match pile.top() {
                    None => bottom.rank == 1,
                    Some(top_id) => {
                        let top = self.table.card(top_id);
                        top.suit == bottom.suit && top.rank + 1 == bottom.rank
                    }
                };
                if accepts {
                    target = Some(id);
                    commit = true;
                }
                break;
            }
        }

        self.table.finish_card_moving(target, commit);

        // The fan shifts whenever its exposed card left or came back.
        if let Some(draw_id) = self.draw_pile {
            self.table.layout_pile(draw_id);
        }

        commit
    }

    fn on_mouse_move(&mut self, world_point: Vec2) {
        self.table.manage_card_moving(world_point);
    }

    fn on_cards_needed(&mut self) {
        let Some(draw_id) = self.draw_pile else {
            return;
        };

        if self.stock.is_empty() {
            while let Some(id) = self.table.pile_mut(draw_id).cards.pop() {
                self.table.card_mut(id).face_up = false;
                self.stock.push(id);
            }
            debug!("recycled draw fan into stock");
        }

        for _ in 0..DRAW_FAN {
            let Some(id) = self.stock.pop() else {
                break;
            };
            self.table.card_mut(id).face_up = true;
            self.table.pile_mut(draw_id).cards.push(id);
        }

        self.table.layout_pile(draw_id);
    }

    fn tick(&mut self, delta_seconds: f64) {
        self.table.tick(delta_seconds);
    }

    fn game_won(&self) -> bool {
        self.foundations.len() == FOUNDATION_PILES
            && self
                .foundations
                .iter()
                .all(|&id| self.table.pile(id).len() == 13)
    }
}
