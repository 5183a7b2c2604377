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
//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::{collections::VecDeque, fmt, io};

use spaceships::{
    board::{Board, CellState},
    codec,
    ships::{LTromino, ShipShape},
    Coordinate, InputSource, MatchEvent, Renderer, Side,
};

/// Input source that replays a fixed list of lines.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts: usize,
    pub rejections: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.prompts += 1;
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn rejected(&mut self, reason: &dyn fmt::Display) {
        self.rejections.push(reason.to_string());
    }
}

/// Renderer that records what it is shown and checks that hidden ships stay hidden.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<MatchEvent>,
    /// Every frame drawn, as `(owner, rows of cell characters)`.
    pub frames: Vec<(Side, Vec<String>)>,
}

impl RecordingRenderer {
    pub fn salvos(&self, side: Side) -> usize {
        self.events
            .iter()
            .filter(|event| **event == MatchEvent::SalvoStarted(side))
            .count()
    }

    pub fn shots(&self, side: Side) -> Vec<MatchEvent> {
        self.events
            .iter()
            .filter(|event| match event {
                MatchEvent::Shot { side: s, .. } => *s == side,
                _ => false,
            })
            .copied()
            .collect()
    }
}

fn cell_char(cell: CellState, hide_ships: bool) -> char {
    match cell {
        CellState::Empty => '.',
        CellState::Occupied if hide_ships => '.',
        CellState::Occupied => '@',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, owner: Side, board: &Board, hide_ships: bool, _name: &str) {
        let rows: Vec<String> = board
            .iter_board()
            .map(|row| row.map(|cell| cell_char(cell, hide_ships)).collect())
            .collect();
        if hide_ships {
            assert!(rows.iter().all(|row| !row.contains('@')));
        }
        self.frames.push((owner, rows));
    }

    fn report(&mut self, event: &MatchEvent) {
        self.events.push(*event);
    }
}

/// Labels of every ship cell on `board`, in placement order.
pub fn ship_labels(board: &Board) -> Vec<String> {
    board
        .ships()
        .iter()
        .flatten()
        .map(|coord| codec::format(*coord))
        .collect()
}

/// Labels of every empty cell on `board`, row by row.
pub fn empty_labels(board: &Board) -> Vec<String> {
    let size = board.dimensions().size();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| Coordinate::new(row, col)))
        .filter(|coord| board.cell_at(*coord) == Ok(CellState::Empty))
        .map(codec::format)
        .collect()
}

/// Checks that every ship on `board` is a valid L and that no two ships share a cell.
pub fn assert_valid_fleet(board: &Board) {
    let mut seen = std::collections::HashSet::new();
    for ship in board.ships() {
        assert!(LTromino.is_valid_placement(ship, board.dimensions()));
        for coord in ship {
            assert!(seen.insert(*coord), "{} is used by two ships", coord);
        }
    }
}
