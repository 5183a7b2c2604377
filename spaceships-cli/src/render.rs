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
//! Text drawing of battlefields and match events.
use std::fmt;

use spaceships::{
    board::{Board, CellState, SquareDimensions},
    codec, MatchEvent, Renderer, ShotOutcome, Side,
};

/// Width of the frame around the smallest battlefield.
const BASE_FRAME_WIDTH: usize = 22;

/// Extra frame width for every step above the smallest battlefield.
const FRAME_WIDTH_STEP: usize = 4;

/// Draws battlefields and reports events on stdout.
pub struct TextRenderer {
    /// Upper-cased name used in the closing message.
    user_name: String,
}

impl TextRenderer {
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_uppercase(),
        }
    }
}

/// How a cell is drawn.
enum ShownCell {
    Unknown,
    Ship,
    Hit,
    Miss,
}

impl ShownCell {
    fn new(cell: CellState, hide_ships: bool) -> Self {
        match cell {
            CellState::Empty => ShownCell::Unknown,
            CellState::Occupied if hide_ships => ShownCell::Unknown,
            CellState::Occupied => ShownCell::Ship,
            CellState::Hit => ShownCell::Hit,
            CellState::Miss => ShownCell::Miss,
        }
    }
}

impl fmt::Display for ShownCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShownCell::Unknown => f.pad("-"),
            ShownCell::Ship => f.pad("o"),
            ShownCell::Hit => f.pad("x"),
            ShownCell::Miss => f.pad("*"),
        }
    }
}

/// Print the frame holding the battlefield's title.
fn show_title(dim: &SquareDimensions, name: &str) {
    let width = BASE_FRAME_WIDTH + FRAME_WIDTH_STEP * (dim.size() - SquareDimensions::MIN_SIZE);
    let title = format!("{} BATTLEFIELD", name.to_uppercase());
    let padding = width.saturating_sub(title.chars().count());
    let border = "#".repeat(width);
    println!();
    println!("{}", border);
    println!(
        "{}{}{}",
        "#".repeat((padding + 1) / 2),
        title,
        "#".repeat(padding / 2)
    );
    println!("{}", border);
}

/// Show the board by printing the grid with column letters on top and row numbers on the
/// left. Takes an iterator over the rows of iterators over the cells.
fn show_board(size: usize, rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ||");
    for col in 0..size {
        print!("{:^4}", codec::column_letter(col));
    }
    println!("||");
    for (i, row) in rows.enumerate() {
        print!("{:>2} ||", i + 1);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!("||");
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, _owner: Side, board: &Board, hide_ships: bool, name: &str) {
        show_title(board.dimensions(), name);
        show_board(
            board.dimensions().size(),
            board
                .iter_board()
                .map(|row| row.map(move |cell| ShownCell::new(cell, hide_ships))),
        );
    }

    fn report(&mut self, event: &MatchEvent) {
        match *event {
            MatchEvent::SalvoStarted(Side::User) => println!("\nUser's turn to fire!"),
            MatchEvent::SalvoStarted(Side::Opponent) => println!("\nComputer's turn to fire!"),
            MatchEvent::Shot {
                side,
                target,
                outcome,
            } => {
                let who = match side {
                    Side::User => "You",
                    Side::Opponent => "Computer",
                };
                let result = match outcome {
                    ShotOutcome::Hit => "hit",
                    ShotOutcome::Miss => "miss",
                };
                println!("{} fired at {}: {}", who, target, result);
            }
            MatchEvent::FleetDestroyed {
                owner: Side::Opponent,
            } => println!("All enemy ships have been hit!"),
            MatchEvent::FleetDestroyed { owner: Side::User } => {
                println!("All your ships have been hit! Computer wins!")
            }
            MatchEvent::Concluded { winner: Side::User } => println!(
                "\n\nCongratulations {}! All enemy spacecraft destroyed. You win!",
                self.user_name
            ),
            MatchEvent::Concluded {
                winner: Side::Opponent,
            } => println!("All your spacecraft destroyed. Computer wins!"),
        }
    }
}
