// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine for SpaceShips, a variant of Battleship played on a square battlefield.
//!
//! Each side hides a fleet of L-shaped ships, three cells each, on its own battlefield.
//! Sides take turns firing salvos at the opposing battlefield, one missile per ship in
//! the fleet. The first side to hit every segment of the opposing fleet wins.
//!
//! The crate is split the same way a match flows:
//!
//! * [`board`] holds the battlefield grid, first as a [`BoardSetup`] while ships are
//!   placed and then as a [`Board`] once shooting starts.
//! * [`ships`] defines the L-tromino shape and its orientations.
//! * [`placement`] randomly places ships without overlap.
//! * [`codec`] converts `"A1"` style labels to coordinates and back.
//! * [`turn`] tracks each side's outgoing shots and validates targets.
//! * [`game`] runs a full match between the user and an automated opponent.
//!
//! Drawing the battlefield and reading lines from a terminal are left to the caller
//! through the [`Renderer`] and [`InputSource`] traits.

pub mod board;
pub mod codec;
pub mod config;
pub mod game;
pub mod placement;
pub mod ships;
pub mod turn;

pub use crate::{
    board::{Board, BoardSetup, CellState, Coordinate, ShotOutcome, SquareDimensions},
    config::{MatchConfig, Username},
    game::{Match, MatchError, MatchEvent, MatchState, Renderer, Side},
    ships::{LTromino, Orientation},
    turn::{InputSource, TurnData},
};
