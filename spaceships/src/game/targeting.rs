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
//! Strategies for choosing where a side fires next.
use rand::Rng;

use crate::{
    board::{Coordinate, SquareDimensions},
    game::MatchError,
    turn::{InputSource, TurnData},
};

/// Chooses targets for one side.
pub trait Targeting {
    /// Pick the next cell to fire on and record it in `turn`. The cell must be on the
    /// battlefield and must not have been fired on before.
    fn next_target(
        &mut self,
        turn: &mut TurnData,
        dim: &SquareDimensions,
    ) -> Result<Coordinate, MatchError>;
}

impl<T: Targeting + ?Sized> Targeting for &mut T {
    fn next_target(
        &mut self,
        turn: &mut TurnData,
        dim: &SquareDimensions,
    ) -> Result<Coordinate, MatchError> {
        (**self).next_target(turn, dim)
    }
}

/// Asks an [`InputSource`] for labels until a usable one arrives.
#[derive(Debug)]
pub struct InteractiveTargeting<I> {
    input: I,
}

impl<I: InputSource> InteractiveTargeting<I> {
    /// Read targets from `input`.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Get the input source back.
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: InputSource> Targeting for InteractiveTargeting<I> {
    fn next_target(
        &mut self,
        turn: &mut TurnData,
        dim: &SquareDimensions,
    ) -> Result<Coordinate, MatchError> {
        Ok(turn.validate_and_record_target(&mut self.input, dim)?)
    }
}

/// Fires uniformly at random among the cells not yet fired on.
#[derive(Debug)]
pub struct RandomTargeting<R> {
    rng: R,
}

impl<R: Rng> RandomTargeting<R> {
    /// Draw targets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Targeting for RandomTargeting<R> {
    fn next_target(
        &mut self,
        turn: &mut TurnData,
        dim: &SquareDimensions,
    ) -> Result<Coordinate, MatchError> {
        if turn.attempts().len() >= dim.total_size() {
            return Err(MatchError::Exhausted);
        }
        loop {
            let coord = self.rng.sample(*dim);
            if let Ok(coord) = turn.record_target(coord) {
                return Ok(coord);
            }
        }
    }
}
