use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geometry::{Bounds, Vec2};

use super::pile::{CardPile, CascadeDirection};
use super::table::{PileId, Table};
use super::types::{GameMode, RenderCard};
use super::SolitaireGame;

const TABLEAU_PILES: usize = 8;
const CELL_PILES: usize = 4;
const FOUNDATION_PILES: usize = 4;

/// FreeCell: one deck dealt entirely face up across eight piles, four free
/// cells, four suit foundations. Multi-card grabs stand in for the one-at-a-
/// time shuffle a player could do by hand, so their size is capped by the
/// free cells open at grab time.
#[derive(Debug, Clone)]
pub struct FreecellGame {
    pub(super) table: Table,
    rng: StdRng,
    pub(super) free_cells: Vec<PileId>,
    pub(super) foundations: Vec<PileId>,
}

impl FreecellGame {
    pub fn new(world_extents: Bounds, card_size: Bounds, seed: u64) -> Self {
        let mut game = Self {
            table: Table::new(world_extents, card_size),
            rng: StdRng::seed_from_u64(seed),
            free_cells: Vec::new(),
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

    fn empty_free_cells(&self) -> usize {
        self.free_cells
            .iter()
            .filter(|&&id| self.table.pile(id).is_empty())
            .count()
    }
}

impl SolitaireGame for FreecellGame {
    fn mode(&self) -> GameMode {
        GameMode::Freecell
    }

    fn new_game(&mut self) {
        self.table.clear();
        self.free_cells.clear();
        self.foundations.clear();

        let mut deck = self.table.generate_deck();
        deck.shuffle(&mut self.rng);

        let world = *self.table.world_extents();
        let card = *self.table.card_size();
        let columns = (TABLEAU_PILES - 1) as f64;

        for i in 0..TABLEAU_PILES {
            let mut pile = CardPile::cascading(CascadeDirection::Down);
            pile.position = Vec2::new(
                world.min.x + (i as f64 / columns) * (world.width() - card.width()),
                world.min.y + world.height() - card.height() * 2.4,
            );
            self.table.add_tableau_pile(pile);
        }

        let tableau = self.table.tableau.clone();
        for (index, id) in deck.into_iter().enumerate() {
            self.table.card_mut(id).face_up = true;
            self.table
                .pile_mut(tableau[index % TABLEAU_PILES])
                .cards
                .push(id);
        }
        for &pile_id in &tableau {
            self.table.layout_pile(pile_id);
        }

        for i in 0..(CELL_PILES + FOUNDATION_PILES) {
            let mut pile = CardPile::singular();
            pile.position = Vec2::new(
                world.min.x + (i as f64 / columns) * (world.width() - card.width()),
                world.min.y + world.height() - card.height() * 1.2,
            );
            let id = self.table.add_pile(pile);
            if i < CELL_PILES {
                self.free_cells.push(id);
            } else {
                self.foundations.push(id);
            }
        }

        debug!("dealt {} game", self.mode().label());
    }

    fn generate_render_list(&self) -> Vec<RenderCard> {
        let mut out = Vec::new();
        for &id in &self.foundations {
            self.table.render_pile(id, &mut out);
        }
        for &id in &self.free_cells {
            self.table.render_pile(id, &mut out);
        }
        self.table.render_tableau_and_moving(&mut out);
        out
    }

    fn on_mouse_grab_at(&mut self, world_point: Vec2) -> bool {
        if self.table.is_card_moving() {
            return false;
        }

        if let Some((pile_id, offset)) = self.table.find_card_and_pile(world_point) {
            let pile = self.table.pile(pile_id);
            let arena = &self.table.arena;
            let finish = pile.len() - 1;

            if !pile.cards_in_order(arena, offset, finish)
                || !pile.cards_alternate_color(arena, offset, finish)
            {
                return false;
            }

            // A run of N needs N-1 open cells to move by hand.
            let run = pile.len() - offset;
            if run > self.empty_free_cells() + 1 {
                debug!("grab of {run} cards refused, not enough open cells");
                return false;
            }

            self.table.start_card_moving(pile_id, offset, world_point);
            return true;
        }

        let card_size = *self.table.card_size();
        for index in 0..self.free_cells.len() {
            let id = self.free_cells[index];
            let pile = self.table.pile(id);
            if pile.contains_point(world_point, &card_size) && !pile.is_empty() {
                self.table.start_card_moving(id, 0, world_point);
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

            if !commit {
                for &id in &self.free_cells {
                    let pile = self.table.pile(id);
                    if pile.contains_point(world_point, &card_size) && pile.is_empty() {
                        target = Some(id);
                        commit = true;
                        break;
                    }
                }
            }
        }

        // Any grabbed run may land on an empty pile, no rank restriction.
        if !commit {
            if let Some(empty_id) = self.table.find_empty_pile(world_point) {
                target = Some(empty_id);
                commit = true;
            }
        }

        self.table.finish_card_moving(target, commit);
        commit
    }

    fn on_mouse_move(&mut self, world_point: Vec2) {
        self.table.manage_card_moving(world_point);
    }

    fn on_cards_needed(&mut self) {
        // The whole deck is on the table from the deal.
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
