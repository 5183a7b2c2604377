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
//! Defines the cell storage of the battlefield. This is shared between the board's setup
//! and playing versions.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, SquareDimensions};

/// State of a single cell in the battlefield.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Nothing here and nothing fired here.
    Empty,
    /// A ship segment that has not been hit.
    Occupied,
    /// A ship segment that has been hit.
    Hit,
    /// An empty cell that has been fired on.
    Miss,
}

impl CellState {
    /// Whether a shot has already been resolved on this cell.
    pub fn targeted(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Grid structure shared between [`BoardSetup`][super::BoardSetup] and
/// [`Board`][super::Board].
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: SquareDimensions,
    /// Cells that make up this board, row-major.
    pub(super) cells: Box<[CellState]>,
}

impl Grid {
    pub(super) fn new(dim: SquareDimensions) -> Self {
        let cells = vec![CellState::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Count the cells currently in the given state.
    pub(super) fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = CellState;

    fn index(&self, coord: B) -> &Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &self.cells[idx]
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &mut self.cells[idx]
    }
}

