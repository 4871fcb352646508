use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geometry::{Bounds, Vec2};

use super::arena::CardId;
use super::pile::{CardPile, CascadeDirection};
use super::table::{PileId, Table};
use super::types::{GameMode, RenderCard, SpiderDifficulty};
use super::SolitaireGame;

/// World units per second for completed-run exits and dealt-card arrivals.
const CARD_FLIGHT_RATE: f64 = 200.0;

const TABLEAU_PILES: usize = 10;
const RUN_LEN: usize = 13;

/// Spider: two decks over ten piles, no foundations. Completed king-to-ace
/// runs fly off the table on their own; difficulty decides how much of the
/// suit structure a run (and a grab) must respect.
#[derive(Debug, Clone)]
pub struct SpiderGame {
    pub(super) table: Table,
    rng: StdRng,
    difficulty: SpiderDifficulty,
    pub(super) stock: Vec<CardId>,
    pub(super) exiting: Vec<CardId>,
}

impl SpiderGame {
    pub fn new(
        world_extents: Bounds,
        card_size: Bounds,
        difficulty: SpiderDifficulty,
        seed: u64,
    ) -> Self {
        let mut game = Self {
            table: Table::new(world_extents, card_size),
            rng: StdRng::seed_from_u64(seed),
            difficulty,
            stock: Vec::new(),
            exiting: Vec::new(),
        };
        game.new_game();
        game
    }

    pub fn new_shuffled(
        world_extents: Bounds,
        card_size: Bounds,
        difficulty: SpiderDifficulty,
    ) -> Self {
        Self::new(world_extents, card_size, difficulty, rand::thread_rng().gen())
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn difficulty(&self) -> SpiderDifficulty {
        self.difficulty
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn exiting_len(&self) -> usize {
        self.exiting.len()
    }

    /// Descending run check plus whatever the difficulty layers on top:
    /// Medium wants one color, Hard wants one suit.
    fn run_acceptable(&self, pile_id: PileId, start: usize, finish: usize) -> bool {
        let pile = self.table.pile(pile_id);
        let arena = &self.table.arena;

        if !pile.cards_in_order(arena, start, finish) {
            return false;
        }

        match self.difficulty {
            SpiderDifficulty::Low => true,
            SpiderDifficulty::Medium => pile.cards_same_color(arena, start, finish),
            SpiderDifficulty::Hard => pile.cards_same_suit(arena, start, finish),
        }
    }

    /// Pops any pile holding a full acceptable king-to-ace run on top and
    /// sends those thirteen cards flying off the table.
    fn sweep_completed_runs(&mut self) {
        let tableau = self.table.tableau.clone();
        let exit_target = self.table.world_extents().max;

        for pile_id in tableau {
            let pile = self.table.pile(pile_id);
            if pile.len() < RUN_LEN {
                continue;
            }
            let Some(top_id) = pile.top() else {
                continue;
            };
            if self.table.card(top_id).rank != 1 {
                continue;
            }

            let len = self.table.pile(pile_id).len();
            if !self.run_acceptable(pile_id, len - RUN_LEN, len - 1) {
                continue;
            }

            for _ in 0..RUN_LEN {
                let Some(id) = self.table.pile_mut(pile_id).cards.pop() else {
                    break;
                };
                let card = self.table.card_mut(id);
                card.target_position = exit_target;
                card.animation_rate = CARD_FLIGHT_RATE;
                self.exiting.push(id);
            }

            if let Some(new_top) = self.table.pile(pile_id).top() {
                self.table.card_mut(new_top).face_up = true;
            }

            debug!("completed run swept off the table");
        }
    }
}

impl SolitaireGame for SpiderGame {
    fn mode(&self) -> GameMode {
        GameMode::Spider
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.stock.clear();
        self.exiting.clear();

        let mut deck = self.table.generate_deck();
        let second = self.table.generate_deck();
        deck.extend(second);
        deck.shuffle(&mut self.rng);

        let world = *self.table.world_extents();
        let card = *self.table.card_size();
        let columns = (TABLEAU_PILES - 1) as f64;

        for i in 0..TABLEAU_PILES {
            let mut pile = CardPile::cascading(CascadeDirection::Down);
            pile.position = Vec2::new(
                world.min.x + (i as f64 / columns) * (world.width() - card.width()),
                world.min.y + world.height() - card.height() * 1.2,
            );
            let count = if i < 4 { 6 } else { 5 };
            for _ in 0..count {
                let id = deck.pop().expect("two decks cover the tableau deal");
                pile.cards.push(id);
            }
            if let Some(top) = pile.top() {
                self.table.card_mut(top).face_up = true;
            }
            let id = self.table.add_tableau_pile(pile);
            self.table.layout_pile(id);
        }

        self.stock = deck;
        debug!(
            "dealt {} game ({}), {} cards in stock",
            self.mode().label(),
            self.difficulty.id(),
            self.stock.len()
        );
    }

    fn generate_render_list(&self) -> Vec<RenderCard> {
        let mut out = Vec::new();
        self.table.render_tableau_and_moving(&mut out);

        // Exiting cards draw over everything until they leave the world.
        for &id in &self.exiting {
            let card = self.table.card(id);
            out.push(RenderCard {
                key: card.render_key(),
                position: card.position,
            });
        }

        out
    }

    fn on_mouse_grab_at(&mut self, world_point: Vec2) -> bool {
        if self.table.is_card_moving() {
            return false;
        }

        let Some((pile_id, offset)) = self.table.find_card_and_pile(world_point) else {
            return false;
        };
        if !self.table.card_at(pile_id, offset).face_up {
            return false;
        }

        let finish = self.table.pile(pile_id).len() - 1;
        if !self.run_acceptable(pile_id, offset, finish) {
            return false;
        }

        self.table.start_card_moving(pile_id, offset, world_point);
        true
    }

    fn on_mouse_release_at(&mut self, world_point: Vec2) -> bool {
        if !self.table.is_card_moving() {
            return false;
        }
        let Some(bottom) = self.table.moving_bottom() else {
            return false;
        };

        let mut target: Option<PileId> = None;
        let mut commit = false;

        if let Some((pile_id, offset)) = self.table.find_card_and_pile(world_point) {
            // Drops land only on a pile's exposed top card, any suit.
            let pile_len = self.table.pile(pile_id).len();
            let card = self.table.card_at(pile_id, offset);
            if offset + 1 == pile_len && card.rank == bottom.rank + 1 {
                target = Some(pile_id);
                commit = true;
            }
        } else if let Some(empty_id) = self.table.find_empty_pile(world_point) {
            target = Some(empty_id);
            commit = true;
        }

        self.table.finish_card_moving(target, commit);
        commit
    }

    fn on_mouse_move(&mut self, world_point: Vec2) {
        self.table.manage_card_moving(world_point);
    }

    fn on_cards_needed(&mut self) {
        if self.stock.is_empty() {
            return;
        }

        // Classic Spider rule: every pile must be occupied before a deal.
        let any_empty = self
            .table
            .tableau
            .iter()
            .any(|&id| self.table.pile(id).is_empty());
        if any_empty {
            debug!("deal refused, empty pile on the table");
            return;
        }

        let entry_corner = self.table.world_extents().min;
        let tableau = self.table.tableau.clone();

        for pile_id in tableau {
            let Some(id) = self.stock.pop() else {
                break;
            };
            self.table.card_mut(id).face_up = true;
            self.table.pile_mut(pile_id).cards.push(id);
            self.table.layout_pile(pile_id);

            // Fly in from the table corner to the slot layout just assigned.
            let card = self.table.card_mut(id);
            card.target_position = card.position;
            card.position = entry_corner;
            card.animation_rate = CARD_FLIGHT_RATE;
        }

        debug!("dealt a row, {} cards left in stock", self.stock.len());
    }

    fn tick(&mut self, delta_seconds: f64) {
        self.table.tick(delta_seconds);

        // Retire the exit flight once every card has landed off-world.
        if !self.exiting.is_empty()
            && self
                .exiting
                .iter()
                .all(|&id| self.table.card(id).animation_rate == 0.0)
        {
            self.exiting.clear();
        }

        self.sweep_completed_runs();
    }

    fn game_won(&self) -> bool {
        !self.table.tableau.is_empty()
            && self
                .table
                .tableau
                .iter()
                .all(|&id| self.table.pile(id).is_empty())
            && self.stock.is_empty()
            && self.exiting.is_empty()
    }
}
