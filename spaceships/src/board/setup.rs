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
//! Implements the setup phase of the board.

use crate::{
    board::{
        Board, CannotPlaceReason, CellState, Coordinate, Grid, OutOfBounds, PlaceError,
        SizeError, SquareDimensions,
    },
    ships::{ShapeProjection, ShipShape},
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow shooting.
#[derive(Debug, Clone)]
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Placements accepted so far, in order.
    ships: Vec<ShapeProjection>,
}

impl BoardSetup {
    /// Begin setup by constructing a new, entirely empty board with the given
    /// [`SquareDimensions`].
    pub fn new(dim: SquareDimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Begin setup of an empty board with the given side length. Fails if the size is
    /// outside the supported range.
    pub fn with_size(size: usize) -> Result<Self, SizeError> {
        SquareDimensions::try_new(size).map(Self::new)
    }

    /// Get the [`SquareDimensions`] of this board.
    pub fn dimensions(&self) -> &SquareDimensions {
        &self.grid.dim
    }

    /// Get the state of the cell at the given coordinate.
    pub fn cell_at(&self, coord: Coordinate) -> Result<CellState, OutOfBounds> {
        self.grid.get(coord).ok_or(OutOfBounds(coord))
    }

    /// Get the placements accepted so far.
    pub fn ships(&self) -> &[ShapeProjection] {
        &self.ships
    }

    /// Number of cells currently occupied by ships.
    pub fn occupied(&self) -> usize {
        self.grid.count(CellState::Occupied)
    }

    /// Check whether every cell of `coords` is on the board and empty.
    pub fn check_cells(&self, coords: &[Coordinate]) -> Result<(), CannotPlaceReason> {
        for coord in coords {
            match self.grid.get(coord) {
                None => return Err(CannotPlaceReason::OutOfBounds),
                Some(CellState::Empty) => {}
                Some(_) => return Err(CannotPlaceReason::AlreadyOccupied),
            }
        }
        Ok(())
    }

    /// Mark the given cells as occupied by a ship. The cells are checked first; if any is
    /// off the board or not empty, nothing is changed and the cells are handed back in the
    /// error.
    pub fn set_occupied(
        &mut self,
        coords: ShapeProjection,
    ) -> Result<(), PlaceError<ShapeProjection>> {
        if let Err(reason) = self.check_cells(&coords) {
            return Err(PlaceError::new(reason, coords));
        }
        // Already ensured that every position is valid and empty.
        for coord in coords.iter() {
            self.grid[coord] = CellState::Occupied;
        }
        self.ships.push(coords);
        Ok(())
    }

    /// Attempts to place a ship of the given shape onto the given cells. The placement
    /// must be a valid projection of the shape and every cell must be empty.
    pub fn place<S: ShipShape + ?Sized>(
        &mut self,
        shape: &S,
        placement: ShapeProjection,
    ) -> Result<(), PlaceError<ShapeProjection>> {
        if !shape.is_valid_placement(&placement, &self.grid.dim) {
            return Err(PlaceError::new(
                CannotPlaceReason::InvalidProjection,
                placement,
            ));
        }
        self.set_occupied(placement)
    }

    /// Finish setup and start taking shots.
    pub fn start(self) -> Board {
        Board {
            grid: self.grid,
            ships: self.ships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::LTromino;

    fn coords(cells: &[(usize, usize)]) -> ShapeProjection {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn new_board_is_empty() {
        for size in SquareDimensions::MIN_SIZE..=SquareDimensions::MAX_SIZE {
            let setup = BoardSetup::with_size(size).unwrap();
            let dim = *setup.dimensions();
            assert!(dim
                .iter_coordinates()
                .flatten()
                .all(|c| setup.cell_at(c) == Ok(CellState::Empty)));
        }
    }

    #[test]
    fn invalid_size() {
        assert_eq!(BoardSetup::with_size(3).unwrap_err().size(), 3);
        assert!(BoardSetup::with_size(11).is_err());
    }

    #[test]
    fn overlapping_placement_changes_nothing() {
        let mut setup = BoardSetup::with_size(4).unwrap();
        setup.place(&LTromino, coords(&[(1, 1), (2, 1), (1, 2)])).unwrap();
        let err = setup
            .place(&LTromino, coords(&[(2, 2), (1, 2), (2, 3)]))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(setup.cell_at(Coordinate::new(2, 3)), Ok(CellState::Empty));
        assert_eq!(setup.occupied(), 3);
        assert_eq!(setup.ships().len(), 1);
    }

    #[test]
    fn rejects_non_l_shapes() {
        let mut setup = BoardSetup::with_size(4).unwrap();
        let err = setup
            .place(&LTromino, coords(&[(0, 0), (0, 1), (0, 2)]))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidProjection);
        assert_eq!(err.into_placement().len(), 3);
        assert_eq!(setup.occupied(), 0);
    }

    #[test]
    fn set_occupied_checks_bounds() {
        let mut setup = BoardSetup::with_size(4).unwrap();
        let err = setup.set_occupied(coords(&[(3, 3), (4, 3)])).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.placement(), &coords(&[(3, 3), (4, 3)]));
        assert_eq!(setup.occupied(), 0);
    }

    #[test]
    fn start_keeps_ships() {
        let mut setup = BoardSetup::with_size(5).unwrap();
        setup.place(&LTromino, coords(&[(4, 4), (3, 4), (4, 3)])).unwrap();
        let board = setup.start();
        assert_eq!(board.ships().len(), 1);
        assert_eq!(board.remaining_segments(), 3);
    }
}
