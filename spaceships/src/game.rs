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
//! Implementation of a full match between the user and an automated opponent.
//!
//! A [`Match`] owns both battlefields and both sides' [`TurnData`]. Each round the
//! user fires a salvo and then, unless the user has already destroyed the whole
//! opposing fleet, the opponent fires one back. Where each shot goes is decided by a
//! [`Targeting`] strategy per side, so the same engine runs interactive games, fully
//! automated games and scripted tests.
use std::io;

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Board, BoardSetup, Coordinate, ShotError, ShotOutcome},
    config::{MatchConfig, Username},
    placement,
    ships::{LTromino, ShipShape},
    turn::TurnData,
};

pub use self::targeting::{InteractiveTargeting, RandomTargeting, Targeting};

mod targeting;

/// Display name of the automated opponent.
pub const OPPONENT_NAME: &str = "Enemy";

/// Display name of the user until one is given.
pub const DEFAULT_USER_NAME: &str = "Player";

/// One of the two participants of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The human player, who always fires first.
    User,
    /// The automated opponent.
    Opponent,
}

impl Side {
    /// Get the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Opponent,
            Side::Opponent => Side::User,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Opponent => 1,
        }
    }
}

/// Where a match stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchState {
    /// The user fires next. Every round starts here.
    AwaitingUserSalvo,
    /// The user has fired this round and the opponent fires next.
    AwaitingOpponentSalvo,
    /// The given side destroyed the other fleet.
    Concluded(Side),
}

impl MatchState {
    /// The side that fires next, if the match is still running.
    pub fn turn(self) -> Option<Side> {
        match self {
            MatchState::AwaitingUserSalvo => Some(Side::User),
            MatchState::AwaitingOpponentSalvo => Some(Side::Opponent),
            MatchState::Concluded(_) => None,
        }
    }
}

/// Something that happened during a match, passed to [`Renderer::report`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchEvent {
    /// The given side starts firing.
    SalvoStarted(Side),
    /// A shot was resolved.
    Shot {
        side: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// Every segment of `owner`'s fleet has been hit.
    FleetDestroyed { owner: Side },
    /// The match is over.
    Concluded { winner: Side },
}

/// Presents a match. Only ever sees the battlefields through shared references.
pub trait Renderer {
    /// Draw `owner`'s battlefield under the display name `name`. With `hide_ships`,
    /// ship segments that have not been hit must look like empty cells.
    fn render(&mut self, owner: Side, board: &Board, hide_ships: bool, name: &str);

    /// Called for every [`MatchEvent`].
    fn report(&mut self, _event: &MatchEvent) {}
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, owner: Side, board: &Board, hide_ships: bool, name: &str) {
        (**self).render(owner, board, hide_ships, name)
    }

    fn report(&mut self, event: &MatchEvent) {
        (**self).report(event)
    }
}

/// Errors that stop a match.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The input source failed, for example because it ran out of lines.
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
    /// A target got past validation but could not be shot.
    #[error(transparent)]
    Shot(#[from] ShotError),
    /// The given side tried to fire when it was not its turn.
    #[error("it is not {0:?}'s turn to fire")]
    OutOfTurn(Side),
    /// The match is already over.
    #[error("the match is already over")]
    AlreadyConcluded,
    /// An automated side has fired on every cell.
    #[error("no untargeted cells remain")]
    Exhausted,
    /// A pre-placed board does not match the configuration.
    #[error("{side:?} board does not match the configuration: {reason}")]
    SetupMismatch { side: Side, reason: String },
}

/// Summary of one salvo.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SalvoReport {
    /// Missiles fired. Less than the salvo size if the opposing fleet was destroyed
    /// first or if an interrupted salvo was resumed.
    pub shots_fired: usize,
    /// Missiles that hit.
    pub hits: usize,
}

/// A match between the user and the opponent.
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    /// Battlefields indexed by their owner.
    boards: [Board; 2],
    /// Outgoing shots indexed by the firing side.
    turns: [TurnData; 2],
    state: MatchState,
    /// Missiles fired so far in the salvo of the side whose turn it is.
    salvo_shots: usize,
    user_name: String,
    hide_opponent_ships: bool,
}

impl Match {
    /// Set up a match: build both battlefields and place each fleet at random.
    pub fn new<R: Rng + ?Sized>(config: MatchConfig, rng: &mut R) -> Self {
        info!(
            "starting match on a {0}x{0} battlefield with {1} ships per side",
            config.size(),
            config.number_of_ships()
        );
        let mut user = BoardSetup::new(*config.dimensions());
        let mut opponent = BoardSetup::new(*config.dimensions());
        placement::place_fleet(rng, &mut user, config.number_of_ships());
        placement::place_fleet(rng, &mut opponent, config.number_of_ships());
        Self::from_parts(config, user.start(), opponent.start())
    }

    /// Start a match from boards whose ships are already placed. Each board must have
    /// the configured size and exactly the configured number of ships.
    pub fn from_setups(
        config: MatchConfig,
        user: BoardSetup,
        opponent: BoardSetup,
    ) -> Result<Self, MatchError> {
        for &(side, setup) in &[(Side::User, &user), (Side::Opponent, &opponent)] {
            if setup.dimensions() != config.dimensions() {
                return Err(MatchError::SetupMismatch {
                    side,
                    reason: format!(
                        "size {} instead of {}",
                        setup.dimensions().size(),
                        config.size()
                    ),
                });
            }
            if setup.ships().len() != config.number_of_ships()
                || setup.occupied() != config.ship_segments()
                || !setup
                    .ships()
                    .iter()
                    .all(|ship| LTromino.is_valid_placement(ship, setup.dimensions()))
            {
                return Err(MatchError::SetupMismatch {
                    side,
                    reason: format!(
                        "{} ships covering {} cells instead of {} L-shaped ships",
                        setup.ships().len(),
                        setup.occupied(),
                        config.number_of_ships()
                    ),
                });
            }
        }
        Ok(Self::from_parts(config, user.start(), opponent.start()))
    }

    fn from_parts(config: MatchConfig, user: Board, opponent: Board) -> Self {
        Self {
            config,
            boards: [user, opponent],
            turns: [TurnData::new(), TurnData::new()],
            state: MatchState::AwaitingUserSalvo,
            salvo_shots: 0,
            user_name: DEFAULT_USER_NAME.to_owned(),
            hide_opponent_ships: true,
        }
    }

    /// Show the user's battlefield under the given name.
    pub fn with_user_name(mut self, name: &Username) -> Self {
        self.user_name = name.as_str().to_owned();
        self
    }

    /// Choose whether the opponent's ships are drawn. Hidden by default.
    pub fn with_opponent_revealed(mut self, reveal: bool) -> Self {
        self.hide_opponent_ships = !reveal;
        self
    }

    /// The configuration this match was built with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The winner, once the match is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Concluded(side) => Some(side),
            _ => None,
        }
    }

    /// The battlefield owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Shots fired by `side`.
    pub fn turn_data(&self, side: Side) -> &TurnData {
        &self.turns[side.index()]
    }

    /// Display name of `side`.
    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::User => &self.user_name,
            Side::Opponent => OPPONENT_NAME,
        }
    }

    /// Draw both battlefields: the user's in full, the opponent's with its ships hidden
    /// unless revealed.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(
            Side::User,
            self.board(Side::User),
            false,
            self.name(Side::User),
        );
        renderer.render(
            Side::Opponent,
            self.board(Side::Opponent),
            self.hide_opponent_ships,
            self.name(Side::Opponent),
        );
    }

    /// Fire one salvo for `side`, which must be the side whose turn it is. Fires up to
    /// the configured number of missiles, stopping as soon as the opposing fleet is
    /// destroyed.
    ///
    /// If choosing a target fails, the shots already fired stay on the board and the
    /// turn does not pass. The next call for the same side continues that salvo with
    /// the missiles it has left. The returned report covers the shots of this call.
    pub fn fire_salvo(
        &mut self,
        side: Side,
        targeting: &mut dyn Targeting,
        renderer: &mut dyn Renderer,
    ) -> Result<SalvoReport, MatchError> {
        match self.state.turn() {
            None => return Err(MatchError::AlreadyConcluded),
            Some(turn) if turn != side => return Err(MatchError::OutOfTurn(side)),
            Some(_) => {}
        }

        let segments = self.config.ship_segments();
        let missiles = self.config.missiles_per_turn();
        let turn = &mut self.turns[side.index()];
        let board = &mut self.boards[side.opponent().index()];
        if self.salvo_shots == 0 {
            turn.begin_turn();
            renderer.report(&MatchEvent::SalvoStarted(side));
        } else {
            debug!(
                "{:?} resumes salvo with {} of {} missiles fired",
                side, self.salvo_shots, missiles
            );
        }

        let mut report = SalvoReport::default();
        while self.salvo_shots < missiles && turn.total_hits() < segments {
            let target = targeting.next_target(turn, board.dimensions())?;
            let outcome = board.resolve_shot(target)?;
            turn.record_result(outcome);
            self.salvo_shots += 1;
            report.shots_fired += 1;
            if outcome == ShotOutcome::Hit {
                report.hits += 1;
            }
            debug!("{:?} fired at {}: {:?}", side, target, outcome);
            renderer.report(&MatchEvent::Shot {
                side,
                target,
                outcome,
            });
        }

        self.salvo_shots = 0;
        if turn.total_hits() >= segments {
            info!("{:?} wins after {} turns", side, turn.number_of_turns());
            self.state = MatchState::Concluded(side);
            renderer.report(&MatchEvent::FleetDestroyed {
                owner: side.opponent(),
            });
            renderer.report(&MatchEvent::Concluded { winner: side });
        } else {
            self.state = match side {
                Side::User => MatchState::AwaitingOpponentSalvo,
                Side::Opponent => MatchState::AwaitingUserSalvo,
            };
        }
        Ok(report)
    }

    /// Play the rest of the current round: draw the battlefields, then the user's salvo,
    /// then the opponent's unless the user just won. Returns the state afterwards.
    pub fn play_round(
        &mut self,
        user: &mut dyn Targeting,
        opponent: &mut dyn Targeting,
        renderer: &mut dyn Renderer,
    ) -> Result<MatchState, MatchError> {
        if let MatchState::Concluded(_) = self.state {
            return Err(MatchError::AlreadyConcluded);
        }
        if self.state == MatchState::AwaitingUserSalvo {
            self.render(renderer);
            self.fire_salvo(Side::User, user, renderer)?;
        }
        if self.state == MatchState::AwaitingOpponentSalvo {
            self.fire_salvo(Side::Opponent, opponent, renderer)?;
        }
        Ok(self.state)
    }

    /// Play rounds until one side wins and return the winner.
    pub fn play(
        &mut self,
        user: &mut dyn Targeting,
        opponent: &mut dyn Targeting,
        renderer: &mut dyn Renderer,
    ) -> Result<Side, MatchError> {
        loop {
            if let MatchState::Concluded(winner) = self.state {
                return Ok(winner);
            }
            self.play_round(user, opponent, renderer)?;
        }
    }
}
