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
use std::collections::HashSet;

use crate::{
    board::{Coordinate, SquareDimensions},
    ships::{Orientation, ShapeProjection, ShipShape},
};

/// The L-shaped ship: a corner cell plus one neighbor along the row axis and one along
/// the column axis.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LTromino;

impl LTromino {
    /// Number of segments in every ship.
    pub const SEGMENTS: usize = 3;
}

impl ShipShape for LTromino {
    fn len(&self) -> usize {
        Self::SEGMENTS
    }

    /// Projects as `[corner, vertical wing, horizontal wing]`.
    fn project(
        &self,
        anchor: Coordinate,
        orientation: Orientation,
        dim: &SquareDimensions,
    ) -> Option<ShapeProjection> {
        if !dim.contains(&anchor) {
            return None;
        }
        let vertical = dim.offset(anchor, orientation.row_step(), 0)?;
        let horizontal = dim.offset(anchor, 0, orientation.col_step())?;
        Some(vec![anchor, vertical, horizontal])
    }

    fn is_valid_placement(&self, proj: &[Coordinate], dim: &SquareDimensions) -> bool {
        if proj.len() != Self::SEGMENTS || !proj.iter().all(|c| dim.contains(c)) {
            return false;
        }
        let distinct: HashSet<_> = proj.iter().collect();
        if distinct.len() != Self::SEGMENTS {
            return false;
        }
        // Any cell may be the corner as long as the other two are one row step and one
        // column step away from it.
        (0..Self::SEGMENTS).any(|corner| {
            let c = proj[corner];
            let mut others = proj
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != corner)
                .map(|(_, o)| o);
            match (others.next(), others.next()) {
                (Some(a), Some(b)) => {
                    (is_row_step(&c, a) && is_col_step(&c, b))
                        || (is_row_step(&c, b) && is_col_step(&c, a))
                }
                _ => false,
            }
        })
    }
}

/// `other` sits directly above or below `corner`.
fn is_row_step(corner: &Coordinate, other: &Coordinate) -> bool {
    corner.col == other.col && (corner.row + 1 == other.row || other.row + 1 == corner.row)
}

/// `other` sits directly left or right of `corner`.
fn is_col_step(corner: &Coordinate, other: &Coordinate) -> bool {
    corner.row == other.row && (corner.col + 1 == other.col || other.col + 1 == corner.col)
}
