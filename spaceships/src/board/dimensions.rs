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
//! Dimensions of a square battlefield.
use rand::{distributions::Distribution, Rng};

use crate::board::{Coordinate, SizeError};

/// Dimensions of a square battlefield. The side length is always within
/// [`MIN_SIZE`][Self::MIN_SIZE]..=[`MAX_SIZE`][Self::MAX_SIZE].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SquareDimensions {
    /// Number of rows, which is also the number of columns.
    size: usize,
}

impl SquareDimensions {
    /// Smallest supported battlefield.
    pub const MIN_SIZE: usize = 4;
    /// Largest supported battlefield. Keeps every column addressable by a single letter.
    pub const MAX_SIZE: usize = 10;

    /// Create new [`SquareDimensions`] with the given side length.
    /// Returns an error if the size is outside the supported range.
    pub fn try_new(size: usize) -> Result<Self, SizeError> {
        if (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            Ok(Self { size })
        } else {
            Err(SizeError::new(size))
        }
    }

    /// Get the side length of these [`SquareDimensions`].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies on the battlefield.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Panics if the coordinate is out of range for the dimensions.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.size, idx % self.size)
    }

    /// Step from `coord` by the given offsets, returning `None` if the result leaves the
    /// battlefield on any side.
    pub fn offset(&self, coord: Coordinate, drow: isize, dcol: isize) -> Option<Coordinate> {
        coord.offset(drow, dcol).filter(|c| self.contains(c))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate { row, col }))
    }
}

impl Distribution<Coordinate> for SquareDimensions {
    /// Pick a cell uniformly at random. The row is drawn before the column.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let row = rng.gen_range(0, self.size);
        let col = rng.gen_range(0, self.size);
        Coordinate { row, col }
    }
}
