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
//! Whole matches played through the public API.
use rand::{rngs::StdRng, SeedableRng};
use spaceships::{
    board::{BoardSetup, CellState},
    game::{InteractiveTargeting, RandomTargeting, Targeting},
    LTromino, Match, MatchConfig, MatchError, MatchEvent, MatchState, ShotOutcome, Side,
};

mod common;

use common::{assert_valid_fleet, empty_labels, ship_labels, RecordingRenderer, ScriptedInput};

fn setup(size: usize, ships: &[[(usize, usize); 3]]) -> BoardSetup {
    let mut setup = BoardSetup::with_size(size).unwrap();
    for ship in ships {
        setup
            .place(&LTromino, ship.iter().map(|&c| c.into()).collect())
            .unwrap();
    }
    setup
}

fn scripted(lines: &[&str]) -> InteractiveTargeting<ScriptedInput> {
    InteractiveTargeting::new(ScriptedInput::new(lines.iter().copied()))
}

#[test]
fn user_sinks_every_ship_in_three_rounds() {
    let config = MatchConfig::with_ships(4, 3).unwrap();
    let mut game = Match::new(config, &mut StdRng::seed_from_u64(7));
    assert_valid_fleet(game.board(Side::User));
    assert_valid_fleet(game.board(Side::Opponent));

    let mut user = InteractiveTargeting::new(ScriptedInput::new(ship_labels(
        game.board(Side::Opponent),
    )));
    let mut opponent =
        InteractiveTargeting::new(ScriptedInput::new(empty_labels(game.board(Side::User))));
    let mut renderer = RecordingRenderer::default();

    let winner = game.play(&mut user, &mut opponent, &mut renderer).unwrap();
    assert_eq!(winner, Side::User);
    assert_eq!(game.state(), MatchState::Concluded(Side::User));
    assert_eq!(game.turn_data(Side::User).total_hits(), 9);
    assert_eq!(game.turn_data(Side::User).number_of_turns(), 3);
    assert_eq!(game.turn_data(Side::Opponent).total_hits(), 0);
    assert_eq!(game.turn_data(Side::Opponent).number_of_turns(), 2);
    assert!(game.board(Side::Opponent).defeated());
    assert!(!game.board(Side::User).defeated());

    assert_eq!(user.into_inner().remaining(), 0);
    // Seven empty cells were scripted and two salvos of three fired.
    assert_eq!(opponent.into_inner().remaining(), 1);

    // Both battlefields are drawn at the start of each round.
    assert_eq!(renderer.frames.len(), 6);
    assert_eq!(renderer.salvos(Side::User), 3);
    assert_eq!(renderer.salvos(Side::Opponent), 2);
    assert_eq!(
        renderer.events.last(),
        Some(&MatchEvent::Concluded { winner: Side::User })
    );
}

#[test]
fn bad_labels_are_reported_and_retried() {
    let ship = [[(0, 0), (1, 0), (0, 1)]];
    let config = MatchConfig::with_ships(4, 1).unwrap();
    let mut game = Match::from_setups(config, setup(4, &ship), setup(4, &ship)).unwrap();

    let mut user = scripted(&["A1", "a1", "Z9", "12", " b1", "b1\n", "A2"]);
    let mut opponent = scripted(&["D4", "C4"]);
    let mut renderer = RecordingRenderer::default();

    assert_eq!(game.play(&mut user, &mut opponent, &mut renderer).unwrap(), Side::User);
    let input = user.into_inner();
    assert_eq!(
        input.rejections,
        vec![
            "Field already targeted. Choose another target.",
            "Target out of range. Please choose a target within the battlefield.",
            "Invalid format. Please enter coordinates like 'A1'.",
            "Invalid format. Please enter coordinates like 'A1'.",
        ]
    );
    assert_eq!(game.turn_data(Side::User).attempts().len(), 3);
    assert_eq!(
        game.board(Side::Opponent).cell_at((0, 1).into()),
        Ok(CellState::Hit)
    );
}

#[test]
fn final_salvo_stops_early_and_opponent_does_not_answer() {
    let ships = [[(0, 0), (1, 0), (0, 1)], [(4, 4), (3, 4), (4, 3)]];
    let config = MatchConfig::with_ships(5, 2).unwrap();
    let mut game = Match::from_setups(config, setup(5, &ships), setup(5, &ships)).unwrap();

    let mut user = scripted(&["A1", "C3", "A2", "B1", "E5", "E4", "D5", "A5"]);
    let mut opponent = scripted(&["C1", "C2", "C3", "C4", "C5", "D1", "D2", "D3"]);
    let mut renderer = RecordingRenderer::default();

    for expected in &[
        MatchState::AwaitingUserSalvo,
        MatchState::AwaitingUserSalvo,
        MatchState::AwaitingUserSalvo,
        MatchState::Concluded(Side::User),
    ] {
        assert_eq!(
            game.play_round(&mut user, &mut opponent, &mut renderer).unwrap(),
            *expected
        );
    }

    let user_shots = renderer.shots(Side::User);
    assert_eq!(user_shots.len(), 7);
    assert_eq!(
        user_shots.last(),
        Some(&MatchEvent::Shot {
            side: Side::User,
            target: (4, 3).into(),
            outcome: ShotOutcome::Hit,
        })
    );
    // The winning shot was the first of the fourth salvo.
    assert_eq!(user.into_inner().remaining(), 1);
    assert_eq!(renderer.salvos(Side::Opponent), 3);
    assert_eq!(game.turn_data(Side::Opponent).attempts().len(), 6);
    assert_eq!(opponent.into_inner().remaining(), 2);
}

#[test]
fn interrupted_salvo_resumes_with_missiles_left() {
    let ships = [[(0, 0), (1, 0), (0, 1)], [(4, 4), (3, 4), (4, 3)]];
    let config = MatchConfig::with_ships(5, 2).unwrap();
    let mut game = Match::from_setups(config, setup(5, &ships), setup(5, &ships)).unwrap();
    let mut opponent = scripted(&["C3", "C4"]);

    let mut first = RecordingRenderer::default();
    let err = game
        .play_round(&mut scripted(&["A1"]), &mut opponent, &mut first)
        .unwrap_err();
    assert!(matches!(err, MatchError::Input(_)));
    assert_eq!(game.state(), MatchState::AwaitingUserSalvo);
    assert_eq!(game.turn_data(Side::User).number_of_turns(), 1);
    assert_eq!(game.turn_data(Side::User).attempts().len(), 1);

    let mut user = scripted(&["A2", "B1"]);
    let mut second = RecordingRenderer::default();
    assert_eq!(
        game.play_round(&mut user, &mut opponent, &mut second).unwrap(),
        MatchState::AwaitingUserSalvo
    );
    // One missile was left in the salvo, so one label stays unread.
    assert_eq!(user.into_inner().remaining(), 1);
    assert_eq!(second.salvos(Side::User), 0);
    assert_eq!(second.shots(Side::User).len(), 1);
    assert_eq!(second.shots(Side::Opponent).len(), 2);
    assert_eq!(game.turn_data(Side::User).number_of_turns(), 1);
    assert_eq!(game.turn_data(Side::User).attempts().len(), 2);
    assert_eq!(game.turn_data(Side::User).total_hits(), 2);
    assert_eq!(game.turn_data(Side::Opponent).number_of_turns(), 1);
}

#[test]
fn opponent_can_win() {
    let ship = [[(0, 0), (1, 0), (0, 1)]];
    let config = MatchConfig::with_ships(4, 1).unwrap();
    let mut game = Match::from_setups(config, setup(4, &ship), setup(4, &ship)).unwrap();

    let mut user = scripted(&["D4", "D3", "D2"]);
    let mut opponent = scripted(&["B1", "A2", "A1"]);
    let mut renderer = RecordingRenderer::default();

    assert_eq!(
        game.play(&mut user, &mut opponent, &mut renderer).unwrap(),
        Side::Opponent
    );
    assert_eq!(game.turn_data(Side::User).number_of_turns(), 3);
    assert_eq!(game.turn_data(Side::Opponent).number_of_turns(), 3);
    assert!(renderer.events.contains(&MatchEvent::FleetDestroyed { owner: Side::User }));
}

#[test]
fn running_out_of_input_stops_the_match() {
    let config = MatchConfig::new(5).unwrap();
    let mut game = Match::new(config, &mut StdRng::seed_from_u64(3));
    let mut user = scripted(&["A1"]);
    let mut opponent = RandomTargeting::new(StdRng::seed_from_u64(4));
    let err = game
        .play(&mut user, &mut opponent, &mut RecordingRenderer::default())
        .unwrap_err();
    assert!(matches!(err, MatchError::Input(_)));
    assert_eq!(game.state(), MatchState::AwaitingUserSalvo);
}

#[test]
fn automated_matches_always_finish() {
    for size in 4..=10 {
        let config = MatchConfig::new(size).unwrap();
        let seed = size as u64 * 31;
        let mut game = Match::new(config, &mut StdRng::seed_from_u64(seed));
        let mut user = RandomTargeting::new(StdRng::seed_from_u64(seed + 1));
        let mut opponent = RandomTargeting::new(StdRng::seed_from_u64(seed + 2));
        let mut renderer = RecordingRenderer::default();

        let winner = game
            .play(&mut user, &mut opponent, &mut renderer)
            .unwrap();
        let loser = winner.opponent();
        assert!(game.board(loser).defeated());
        assert!(!game.board(winner).defeated());
        assert_eq!(
            game.turn_data(winner).total_hits(),
            config.ship_segments()
        );
        assert!(game.turn_data(loser).total_hits() < config.ship_segments());

        // Every shot left a mark on the board it was fired at.
        for side in &[Side::User, Side::Opponent] {
            let target = game.board(side.opponent());
            for coord in game.turn_data(*side).attempts() {
                assert!(target.cell_at(*coord).unwrap().targeted());
            }
        }

        // The user fires first, so the opponent never has more salvos.
        let user_turns = game.turn_data(Side::User).number_of_turns();
        let opponent_turns = game.turn_data(Side::Opponent).number_of_turns();
        match winner {
            Side::User => assert_eq!(opponent_turns + 1, user_turns),
            Side::Opponent => assert_eq!(opponent_turns, user_turns),
        }
    }
}

#[test]
fn targeting_is_object_safe() {
    let mut strategies: Vec<Box<dyn Targeting>> = vec![
        Box::new(RandomTargeting::new(StdRng::seed_from_u64(1))),
        Box::new(scripted(&["A1"])),
    ];
    let dim = *MatchConfig::new(4).unwrap().dimensions();
    for strategy in &mut strategies {
        let mut turn = spaceships::TurnData::new();
        let coord = strategy.next_target(&mut turn, &dim).unwrap();
        assert!(turn.has_attempted(&coord));
    }
}
