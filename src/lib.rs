/* lib.rs
 *
 * Copyright 2026 emviolet
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

//! Solitaire rule engine: Klondike, Spider and FreeCell over a shared
//! card-table core.
//!
//! The engine is presentation-agnostic. A frontend owns a
//! [`game::SolitaireGame`], feeds it pointer gestures and ticks in world
//! coordinates, and draws whatever [`game::SolitaireGame::generate_render_list`]
//! hands back.

pub mod game;
pub mod geometry;

pub use game::{game_for_mode, GameMode, SolitaireGame, SpiderDifficulty};
pub use geometry::{Bounds, Vec2};
