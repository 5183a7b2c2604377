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
//! Match configuration and validation of the values a player supplies before a match.
use std::fmt;

use thiserror::Error;

use crate::{
    board::{SizeError, SquareDimensions},
    ships::LTromino,
};

/// Number of ships each side fields on the smallest battlefield.
pub const DEFAULT_SHIPS: usize = 3;

/// Segments in every ship.
pub const SHIP_SEGMENTS: usize = LTromino::SEGMENTS;

/// Shortest accepted username, in characters.
pub const USERNAME_MIN_LEN: usize = 3;

/// Longest accepted username, in characters.
pub const USERNAME_MAX_LEN: usize = 8;

/// Reason a match configuration was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The size answer was not an integer.
    #[error("Invalid input. Please enter a valid integer size.")]
    NotANumber(String),
    /// The size is outside the supported range.
    #[error(transparent)]
    Size(#[from] SizeError),
    /// A match needs at least one ship per side.
    #[error("each side needs at least one ship")]
    NoShips,
    /// The fleet has more segments than the battlefield has cells.
    #[error(
        "{ships} ships need {} cells but the battlefield only has {cells}",
        .ships * SHIP_SEGMENTS
    )]
    FleetTooLarge { ships: usize, cells: usize },
}

/// Immutable settings for a single match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MatchConfig {
    /// Dimensions of both battlefields.
    dim: SquareDimensions,
    /// Ships placed on each battlefield.
    number_of_ships: usize,
}

impl MatchConfig {
    /// Build the configuration for a battlefield of the given size. Larger battlefields
    /// field more ships: one more for every step above the minimum size.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        let dim = SquareDimensions::try_new(size)?;
        let number_of_ships = size - (SquareDimensions::MIN_SIZE - DEFAULT_SHIPS);
        Ok(Self {
            dim,
            number_of_ships,
        })
    }

    /// Build a configuration with an explicit number of ships per side.
    pub fn with_ships(size: usize, number_of_ships: usize) -> Result<Self, ConfigError> {
        let dim = SquareDimensions::try_new(size)?;
        if number_of_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if number_of_ships * SHIP_SEGMENTS > dim.total_size() {
            return Err(ConfigError::FleetTooLarge {
                ships: number_of_ships,
                cells: dim.total_size(),
            });
        }
        Ok(Self {
            dim,
            number_of_ships,
        })
    }

    /// Dimensions of both battlefields.
    pub fn dimensions(&self) -> &SquareDimensions {
        &self.dim
    }

    /// Side length of both battlefields.
    pub fn size(&self) -> usize {
        self.dim.size()
    }

    /// Ships placed on each battlefield.
    pub fn number_of_ships(&self) -> usize {
        self.number_of_ships
    }

    /// Hits needed to destroy a whole fleet.
    pub fn ship_segments(&self) -> usize {
        self.number_of_ships * SHIP_SEGMENTS
    }

    /// Shots in every salvo.
    pub fn missiles_per_turn(&self) -> usize {
        self.number_of_ships
    }
}

/// Parse the answer to the battlefield size prompt.
pub fn parse_battlefield_size(input: &str) -> Result<MatchConfig, ConfigError> {
    let size = input
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::NotANumber(input.to_owned()))?;
    MatchConfig::new(size)
}

/// Error returned for a username of the wrong length.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("Your username does not meet the length requirement")]
pub struct UsernameError(String);

/// A player name between [`USERNAME_MIN_LEN`] and [`USERNAME_MAX_LEN`] characters long.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate a username. Length is counted in characters, not bytes.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, UsernameError> {
        let name = name.into();
        let len = name.chars().count();
        if (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            Ok(Username(name))
        } else {
            Err(UsernameError(name))
        }
    }

    /// The name as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.0)
    }
}
