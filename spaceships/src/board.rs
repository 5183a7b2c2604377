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
//! Types that make up the battlefield.
//!
//! A battlefield starts out as a [`BoardSetup`], which only allows ships to be placed.
//! Calling [`BoardSetup::start`] turns it into a [`Board`], which only allows shots. A
//! cell therefore becomes `Occupied` during setup and never afterwards, and is `Hit` or
//! `Miss` only as the result of a shot.

use crate::ships::ShapeProjection;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::SquareDimensions,
    errors::{
        CannotPlaceReason, CannotShootReason, OutOfBounds, PlaceError, ShotError, SizeError,
    },
    grid::CellState,
    setup::BoardSetup,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Result of a shot on a single battlefield.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship segment.
    Hit,
}

/// A single side's battlefield while shots are being fired at it.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells.
    grid: Grid,

    /// Every ship placed during setup, in placement order.
    ships: Vec<ShapeProjection>,
}

impl Board {
    /// Get the [`SquareDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &SquareDimensions {
        &self.grid.dim
    }

    /// Get the state of the cell at the given coordinate.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellState, OutOfBounds> {
        self.grid.get(coord).ok_or(OutOfBounds(coord))
    }

    /// Get the placements of all ships on this board.
    pub fn ships(&self) -> &[ShapeProjection] {
        &self.ships
    }

    /// Total number of ship segments on this board, hit or not.
    pub fn segments(&self) -> usize {
        self.ships.iter().map(|ship| ship.len()).sum()
    }

    /// Number of ship segments not yet hit.
    pub fn remaining_segments(&self) -> usize {
        self.grid.count(CellState::Occupied)
    }

    /// Returns true once every ship segment has been hit.
    pub fn defeated(&self) -> bool {
        self.remaining_segments() == 0
    }

    /// Fire a shot at this board. An occupied cell becomes `Hit` and an empty cell becomes
    /// `Miss`. Shooting a cell twice or off the board is an error and leaves the board
    /// unchanged.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let cell = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) => cell,
        };
        match *cell {
            CellState::Occupied => {
                *cell = CellState::Hit;
                Ok(ShotOutcome::Hit)
            }
            CellState::Empty => {
                *cell = CellState::Miss;
                Ok(ShotOutcome::Miss)
            }
            CellState::Hit | CellState::Miss => {
                Err(ShotError::new(CannotShootReason::AlreadyTargeted, coord))
            }
        }
    }

    /// Get an iterator over the board's rows. The iterator's item is another iterator
    /// that iterates over the cell states of a single row.
    pub fn iter_board<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellState>> {
        let grid = &self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| grid[coord]))
    }
}
