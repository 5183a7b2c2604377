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
use std::fmt;

/// The coordinates of a cell in the battlefield, zero-based.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell. Displayed as a 1-based number.
    pub row: usize,
    /// Horizontal position of the cell. Displayed as a letter.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step from this coordinate by the given row and column offsets. Returns `None` if
    /// the result would be negative. Upper bounds are left to the dimensions.
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        Some(Self {
            row: step(self.row, drow)?,
            col: step(self.col, dcol)?,
        })
    }
}

fn step(pos: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        pos.checked_sub(delta.unsigned_abs())
    } else {
        pos.checked_add(delta as usize)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Shows the coordinate as a battlefield label such as `B3`. Columns past `Z` have
    /// no letter and fall back to the raw pair.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.col < 26 {
            write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
