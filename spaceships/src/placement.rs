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
//! Random placement of L-shaped ships.
//!
//! Placement is plain rejection sampling: draw a corner cell and an orientation, and
//! keep the candidate only if it fits on the battlefield without touching an occupied
//! cell. The random source is always passed in, so a seeded generator gives repeatable
//! fleets.

use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{BoardSetup, CannotPlaceReason, SquareDimensions},
    ships::{LTromino, Orientation, ShapeProjection, ShipShape},
};

/// Error returned by [`try_place_ship`] when no candidate was accepted in time.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no free position found after {attempts} attempts")]
pub struct PlacementExhausted {
    /// Number of candidates drawn and rejected.
    pub attempts: usize,
}

/// Returns true if `count` ships can possibly fit on a battlefield of the given
/// dimensions. A `false` result means placement can never finish.
pub fn fleet_fits(dim: &SquareDimensions, count: usize) -> bool {
    count
        .checked_mul(LTromino::SEGMENTS)
        .map_or(false, |cells| cells <= dim.total_size())
}

/// Draw a single candidate and place it if it fits. Returns the placement on success.
fn attempt<R: Rng + ?Sized>(rng: &mut R, setup: &mut BoardSetup) -> Option<ShapeProjection> {
    let anchor = rng.sample(*setup.dimensions());
    let orientation: Orientation = rng.gen();
    let proj = LTromino.project(anchor, orientation, setup.dimensions())?;
    match setup.place(&LTromino, proj.clone()) {
        Ok(()) => Some(proj),
        Err(err) => {
            debug_assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
            None
        }
    }
}

/// Place one ship at a random free position and return its cells. Keeps drawing until
/// a candidate fits, without any limit on the number of attempts.
pub fn place_ship<R: Rng + ?Sized>(rng: &mut R, setup: &mut BoardSetup) -> ShapeProjection {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        if let Some(proj) = attempt(rng, setup) {
            debug!("placed ship at {:?} after {} attempts", proj, attempts);
            return proj;
        }
    }
}

/// Like [`place_ship`], but gives up after `max_attempts` rejected candidates.
pub fn try_place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    setup: &mut BoardSetup,
    max_attempts: usize,
) -> Result<ShapeProjection, PlacementExhausted> {
    for attempts in 1..=max_attempts {
        if let Some(proj) = attempt(rng, setup) {
            debug!("placed ship at {:?} after {} attempts", proj, attempts);
            return Ok(proj);
        }
    }
    Err(PlacementExhausted {
        attempts: max_attempts,
    })
}

/// Place `count` ships one after the other. Each ship only sees the cells taken by
/// the ships before it.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    setup: &mut BoardSetup,
    count: usize,
) -> Vec<ShapeProjection> {
    if !fleet_fits(setup.dimensions(), count) {
        warn!(
            "{} ships cannot fit on a {}x{} battlefield; placement will not finish",
            count,
            setup.dimensions().size(),
            setup.dimensions().size()
        );
    }
    (0..count).map(|_| place_ship(rng, setup)).collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::board::CellState;

    #[test]
    fn ship_lands_on_empty_cells() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut setup = BoardSetup::with_size(4).unwrap();
        let proj = place_ship(&mut rng, &mut setup);
        assert!(LTromino.is_valid_placement(&proj, setup.dimensions()));
        for coord in &proj {
            assert_eq!(setup.cell_at(*coord), Ok(CellState::Occupied));
        }
        assert_eq!(setup.occupied(), 3);
    }

    #[test]
    fn fleet_never_overlaps() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut setup = BoardSetup::with_size(4).unwrap();
            let fleet = place_fleet(&mut rng, &mut setup, 3);
            assert_eq!(fleet.len(), 3);
            assert_eq!(setup.occupied(), 9);
        }
    }

    #[test]
    fn same_seed_same_fleet() {
        let mut a = BoardSetup::with_size(7).unwrap();
        let mut b = BoardSetup::with_size(7).unwrap();
        let fa = place_fleet(&mut StdRng::seed_from_u64(99), &mut a, 6);
        let fb = place_fleet(&mut StdRng::seed_from_u64(99), &mut b, 6);
        assert_eq!(fa, fb);
    }

    #[test]
    fn bounded_attempts_give_up_on_full_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut setup = BoardSetup::with_size(4).unwrap();
        let all: Vec<_> = setup.dimensions().iter_coordinates().flatten().collect();
        setup.set_occupied(all).unwrap();
        assert_eq!(
            try_place_ship(&mut rng, &mut setup, 200),
            Err(PlacementExhausted { attempts: 200 })
        );
    }

    #[test]
    fn bounded_attempts_succeed_on_open_board() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut setup = BoardSetup::with_size(10).unwrap();
        for _ in 0..9 {
            assert!(try_place_ship(&mut rng, &mut setup, 10_000).is_ok());
        }
        assert_eq!(setup.occupied(), 27);
    }

    #[test]
    fn fits_check() {
        let dim = SquareDimensions::try_new(4).unwrap();
        assert!(fleet_fits(&dim, 5));
        assert!(!fleet_fits(&dim, 6));
        assert!(!fleet_fits(&dim, usize::max_value()));
    }
}
