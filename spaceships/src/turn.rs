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
//! Per-side record of outgoing shots, and the gate every target passes through.
use std::{collections::HashSet, fmt, io};

use thiserror::Error;

use crate::{
    board::{Coordinate, ShotOutcome, SquareDimensions},
    codec::{self, LabelError},
};

/// Prompt shown when asking for a target.
pub const TARGET_PROMPT: &str = "Enter target coordinates (e.g., A1):";

/// Source of raw lines of text, typically a terminal.
pub trait InputSource {
    /// Show `prompt` and block until a line is available. The returned line may still
    /// carry its line terminator.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Called when the last line was rejected, before the prompt is repeated.
    fn rejected(&mut self, _reason: &dyn fmt::Display) {}
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }

    fn rejected(&mut self, reason: &dyn fmt::Display) {
        (**self).rejected(reason)
    }
}

/// Reason a target was refused.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TargetError {
    /// The label could not be parsed or is off the battlefield.
    #[error(transparent)]
    Label(#[from] LabelError),
    /// This side already fired at the cell.
    #[error("Field already targeted. Choose another target.")]
    AlreadyTargeted(Coordinate),
}

/// Outgoing shots of one side against one opponent battlefield.
#[derive(Debug, Clone, Default)]
pub struct TurnData {
    /// Hits scored against the opponent so far.
    total_hits: usize,
    /// Every cell fired on, for lookup.
    previous_attempts: HashSet<Coordinate>,
    /// Every cell fired on, in order.
    history: Vec<Coordinate>,
    /// Salvos started.
    number_of_turns: usize,
}

impl TurnData {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hits scored against the opponent so far.
    pub fn total_hits(&self) -> usize {
        self.total_hits
    }

    /// Number of salvos this side has started.
    pub fn number_of_turns(&self) -> usize {
        self.number_of_turns
    }

    /// Cells fired on so far, oldest first.
    pub fn attempts(&self) -> &[Coordinate] {
        &self.history
    }

    /// Returns true if this side already fired on `coord`.
    pub fn has_attempted(&self, coord: &Coordinate) -> bool {
        self.previous_attempts.contains(coord)
    }

    /// Parse `label` and check it against previous attempts, without recording it. A
    /// trailing line terminator is ignored; any other whitespace makes the label
    /// malformed.
    pub fn check_target(
        &self,
        label: &str,
        dim: &SquareDimensions,
    ) -> Result<Coordinate, TargetError> {
        let label = label.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let coord = codec::parse(label, dim.size())?;
        if self.has_attempted(&coord) {
            return Err(TargetError::AlreadyTargeted(coord));
        }
        Ok(coord)
    }

    /// Record `coord` as fired on. Fails if it already was.
    pub fn record_target(&mut self, coord: Coordinate) -> Result<Coordinate, TargetError> {
        if !self.previous_attempts.insert(coord) {
            return Err(TargetError::AlreadyTargeted(coord));
        }
        self.history.push(coord);
        Ok(coord)
    }

    /// Read labels from `input` until one names a cell on the battlefield that this
    /// side has not fired on, then record and return it. Every rejected line is
    /// reported to the input source and the prompt is repeated; there is no limit on
    /// the number of retries. Only a failure of the input source itself ends the loop
    /// early.
    pub fn validate_and_record_target<I: InputSource + ?Sized>(
        &mut self,
        input: &mut I,
        dim: &SquareDimensions,
    ) -> io::Result<Coordinate> {
        loop {
            let line = input.read_line(TARGET_PROMPT)?;
            match self
                .check_target(&line, dim)
                .and_then(|coord| self.record_target(coord))
            {
                Ok(coord) => return Ok(coord),
                Err(err) => input.rejected(&err),
            }
        }
    }

    /// Count the outcome of a shot.
    pub fn record_result(&mut self, outcome: ShotOutcome) {
        if outcome == ShotOutcome::Hit {
            self.total_hits += 1;
        }
    }

    /// Note the start of a new salvo.
    pub(crate) fn begin_turn(&mut self) {
        self.number_of_turns += 1;
    }
}
