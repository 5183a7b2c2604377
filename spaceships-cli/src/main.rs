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
use std::io::{self, BufRead, Write};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use spaceships::{
    config::{self, ConfigError, USERNAME_MAX_LEN, USERNAME_MIN_LEN},
    game::{InteractiveTargeting, RandomTargeting},
    InputSource, Match, MatchConfig, MatchError, Side, SquareDimensions, Username,
};

use crate::{logging::init_logging, render::TextRenderer};

mod logging;
mod render;

const BANNER: &str = r"
  ____                       ____  _     _
 / ___| _ __   __ _  ___ ___/ ___|| |__ (_)_ __  ___
 \___ \| '_ \ / _` |/ __/ _ \___ \| '_ \| | '_ \/ __|
  ___) | |_) | (_| | (_|  __/___) | | | | | |_) \__ \
 |____/| .__/ \__,_|\___\___|____/|_| |_|_| .__/|___/
       |_|                                |_|
";

fn main() -> io::Result<()> {
    init_logging();
    let matches = App::new("SpaceShips")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line SpaceShips, a Battleship variant with L-shaped ships.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of the battlefield, between 4 and 10")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("username to play under, 3 to 8 characters")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for ship placement and computer fire, for repeatable games")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("show the computer's ships"),
        )
        .get_matches();

    println!("{}", BANNER);
    println!("\nWelcome to Spaceships, a variant of the classic BattleShip game");

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    match run(&matches, &mut input) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
            Ok(())
        }
        other => other,
    }
}

/// Configure and play matches until the player declines another one.
fn run<B: BufRead>(matches: &ArgMatches, input: &mut InputReader<B>) -> io::Result<()> {
    let (mut placement_rng, mut fire_rng) = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using seed {}", seed);
        (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        )
    } else {
        (StdRng::from_entropy(), StdRng::from_entropy())
    };
    let reveal = matches.is_present("reveal");

    let username = choose_username(matches, input)?;
    loop {
        let config = choose_config(matches, input)?;
        let mut game = Match::new(config, &mut placement_rng)
            .with_user_name(&username)
            .with_opponent_revealed(reveal);
        let mut renderer = TextRenderer::new(username.as_str());
        let mut user = InteractiveTargeting::new(&mut *input);
        let mut opponent = RandomTargeting::new(&mut fire_rng);

        match game.play(&mut user, &mut opponent, &mut renderer) {
            Ok(_) => {}
            Err(MatchError::Input(err)) => return Err(err),
            Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
        }
        game.render(&mut renderer);
        show_summary(&game);

        let again = input.read_input_lower("Play again? (y/N)", |answer| match answer {
            "yes" | "y" => Some(true),
            "no" | "n" | "" => Some(false),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?;
        if !again {
            return Ok(());
        }
    }
}

/// Take the username from the args if valid, otherwise ask for one.
fn choose_username<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<Username> {
    if let Some(name) = matches.value_of("name") {
        match Username::new(name) {
            Ok(name) => return Ok(name),
            Err(err) => println!("{}", err),
        }
    }
    let prompt = format!(
        "Enter your chosen username, length between {} and {} chars:",
        USERNAME_MIN_LEN, USERNAME_MAX_LEN
    );
    input.read_input(&prompt, |name| match Username::new(name) {
        Ok(name) => Some(name),
        Err(err) => {
            println!("{}", err);
            None
        }
    })
}

/// Take the battlefield size from the args if valid, otherwise ask for one.
fn choose_config<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<MatchConfig> {
    fn check(answer: &str) -> Option<MatchConfig> {
        match config::parse_battlefield_size(answer) {
            Ok(config) => Some(config),
            Err(ConfigError::Size(_)) => {
                println!(
                    "Invalid input, please enter a number value between {} and {}.",
                    SquareDimensions::MIN_SIZE,
                    SquareDimensions::MAX_SIZE
                );
                None
            }
            Err(err) => {
                println!("{}", err);
                None
            }
        }
    }
    if let Some(config) = matches.value_of("size").and_then(check) {
        return Ok(config);
    }
    let prompt = format!(
        "Enter the size of the battlefield, size should be between {} and {}:",
        SquareDimensions::MIN_SIZE,
        SquareDimensions::MAX_SIZE
    );
    input.read_input(&prompt, check)
}

/// Print how the user's side did.
fn show_summary(game: &Match) {
    let turn = game.turn_data(Side::User);
    let config = game.config();
    println!(
        "\n{} fired {} missiles over {} turns and scored {} of {} hits on a {}x{} battlefield.",
        game.name(Side::User),
        turn.attempts().len(),
        turn.number_of_turns(),
        turn.total_hits(),
        config.ship_segments(),
        config.size(),
        config.size()
    );
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. End of
    /// input is reported as `UnexpectedEof`.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(())
    }
}

impl<B: BufRead> InputSource for InputReader<B> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.read_input_inner(prompt)?;
        Ok(self.buf.clone())
    }

    fn rejected(&mut self, reason: &dyn std::fmt::Display) {
        println!("{}", reason);
    }
}
