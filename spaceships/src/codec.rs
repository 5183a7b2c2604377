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
//! Conversion between battlefield labels such as `"C7"` and [`Coordinate`]s.
//!
//! A label is one column letter followed by a 1-based row number. Letters are
//! case-insensitive.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coordinate;

/// Matcher for a column letter followed by row digits.
static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<col>[A-Za-z])(?P<row>[0-9]+)$").unwrap());

/// Reason a label could not be turned into a coordinate.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum LabelError {
    /// The label is not a letter followed by digits.
    #[error("Invalid format. Please enter coordinates like 'A1'.")]
    Malformed(String),
    /// The label is well formed but names a cell off the battlefield.
    #[error("Target out of range. Please choose a target within the battlefield.")]
    OutOfRange(String),
}

/// Parse a label on a battlefield of the given size.
pub fn parse(label: &str, size: usize) -> Result<Coordinate, LabelError> {
    let captures = LABEL
        .captures(label)
        .ok_or_else(|| LabelError::Malformed(label.to_owned()))?;
    let letter = captures["col"].as_bytes()[0].to_ascii_uppercase();
    let col = usize::from(letter - b'A');
    // Digits that overflow are still digits, just very far away.
    let row = match captures["row"].parse::<usize>() {
        Ok(row) if row >= 1 => row - 1,
        _ => return Err(LabelError::OutOfRange(label.to_owned())),
    };
    if row >= size || col >= size {
        return Err(LabelError::OutOfRange(label.to_owned()));
    }
    Ok(Coordinate::new(row, col))
}

/// Format a coordinate as a label. The inverse of [`parse`] for cells on the
/// battlefield.
pub fn format(coord: Coordinate) -> String {
    coord.to_string()
}

/// Letter naming the given zero-based column.
pub fn column_letter(col: usize) -> char {
    debug_assert!(col < 26);
    (b'A' + col as u8) as char
}
