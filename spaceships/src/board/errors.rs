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
//! Errors used by the `Board` and `BoardSetup`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::{Coordinate, SquareDimensions};

/// Error returned when a battlefield size is outside the supported range.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error(
    "battlefield size must be between {} and {}, got {size}",
    SquareDimensions::MIN_SIZE,
    SquareDimensions::MAX_SIZE
)]
pub struct SizeError {
    size: usize,
}

impl SizeError {
    pub(crate) fn new(size: usize) -> Self {
        Self { size }
    }

    /// The size that was rejected.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Error returned when reading a cell that is not on the battlefield.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {0} is out of bounds")]
pub struct OutOfBounds(pub Coordinate);

/// Reason why a ship could not be placed with a given projection.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The projection provided was not a valid projection of the ship shape.
    #[error("the projection provided was not valid")]
    InvalidProjection,
    /// One or more cells of the projection are off the battlefield.
    #[error("the requested position leaves the battlefield")]
    OutOfBounds,
    /// One or more of the cells in the projection was already occupied.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError<P> {
    #[source]
    reason: CannotPlaceReason,
    placement: P,
}

impl<P> Debug for PlaceError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P> PlaceError<P> {
    /// Construct a placement error from a reason and placement.
    pub(super) fn new(reason: CannotPlaceReason, placement: P) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the placement that was attempted.
    pub fn placement(&self) -> &P {
        &self.placement
    }

    /// Extract the placement from this error.
    pub fn into_placement(self) -> P {
        self.placement
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    OutOfBounds,

    /// A shot has already been fired at that cell.
    AlreadyTargeted,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason:?}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }
}
