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
//! Types used for defining ships and their shapes.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, SquareDimensions};

pub use self::tromino::LTromino;

mod tromino;

/// Projection of a shape onto the battlefield relative to a particular anchor. This is
/// a simple typedef of a `Vec`, however projections retrieved from a particular
/// [`ShipShape`] should not be modified, as shapes are free to reject any projection
/// that they did not generate.
pub type ShapeProjection = Vec<Coordinate>;

/// Rotation of an L-shaped ship. Names the two directions its wings extend from the
/// corner cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// One wing on the next row, one on the next column.
    DownRight,
    /// One wing on the next row, one on the previous column.
    DownLeft,
    /// One wing on the previous row, one on the previous column.
    UpLeft,
    /// One wing on the previous row, one on the next column.
    UpRight,
}

impl Orientation {
    /// All orientations, in the order they are numbered when drawn at random.
    pub const ALL: &'static [Orientation] = &[
        Orientation::DownRight,
        Orientation::DownLeft,
        Orientation::UpLeft,
        Orientation::UpRight,
    ];

    /// Row step of the vertical wing.
    pub fn row_step(self) -> isize {
        match self {
            Orientation::DownRight | Orientation::DownLeft => 1,
            Orientation::UpLeft | Orientation::UpRight => -1,
        }
    }

    /// Column step of the horizontal wing.
    pub fn col_step(self) -> isize {
        match self {
            Orientation::DownRight | Orientation::UpRight => 1,
            Orientation::DownLeft | Orientation::UpLeft => -1,
        }
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::ALL[rng.gen_range(0, Orientation::ALL.len())]
    }
}

/// Trait for shapes that a ship can be.
pub trait ShipShape {
    /// Number of cells the shape covers.
    fn len(&self) -> usize;

    /// Project the shape from `anchor` in the given orientation. Returns `None` if any
    /// cell would fall off the battlefield. Does not in any way account for whether
    /// cells are already occupied or not.
    fn project(
        &self,
        anchor: Coordinate,
        orientation: Orientation,
        dim: &SquareDimensions,
    ) -> Option<ShapeProjection>;

    /// Return true if the given cells are a valid placement of this ship in the
    /// specified dimensions. Does not account for whether cells are already occupied.
    fn is_valid_placement(&self, proj: &[Coordinate], dim: &SquareDimensions) -> bool;
}
