// Copyright 2025 Fernando Borretti
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

use std::io::stdin;
use std::io::stdout;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::Parser;
use clap::Subcommand;
use kural_core::Date;
use kural_core::QuestionKind;
use kural_core::TinyRng;
use kural_core::error::Fallible;

use crate::cmd::Session;
use crate::cmd::quiz::run_quiz;
use crate::cmd::read;
use crate::cmd::read::PrintSharer;
use crate::cmd::stats::render_stats;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding kural.toml, the corpus and the database. By default,
    /// the current working directory is used.
    #[arg(long, global = true)]
    directory: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the kural of the day and count it towards the reading streak.
    Today {
        /// Pretend today is this date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
        /// Also print the explanations.
        #[arg(long)]
        explain: bool,
    },
    /// Show a random kural.
    Random {
        #[arg(long)]
        explain: bool,
    },
    /// Show a kural by number.
    Show {
        number: u32,
        #[arg(long)]
        explain: bool,
    },
    /// Search verses, translations, numbers and chapter names.
    Search { query: String },
    /// List the chapters.
    Chapters,
    /// List the kurals of a chapter.
    Chapter { name: String },
    /// Answer one quiz question.
    Quiz {
        /// Which kind of question to ask. Default is missing-word.
        #[arg(long, value_parser = parse_kind)]
        kind: Option<QuestionKind>,
        /// Seed for the question generator. By default, the clock is used.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print reading and quiz statistics.
    Stats,
    /// List recently viewed kurals.
    History,
    /// List favorite kurals.
    Favorites,
    /// Add a kural to the favorites, or remove it if it is already there.
    Favorite { number: u32 },
    /// Print the share message for a kural.
    Share { number: u32 },
}

fn parse_kind(value: &str) -> Result<QuestionKind, String> {
    QuestionKind::try_from(value).map_err(|e| e.to_string())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

pub fn entrypoint() -> Fallible<()> {
    let cli = Cli::parse();
    let mut session = Session::open(cli.directory)?;
    match cli.command {
        Command::Today { date, explain } => {
            let today = match date {
                Some(date) => Date::try_from(date.as_str())?,
                None => Date::today(),
            };
            println!("{}", read::today(&mut session, today, explain)?);
        }
        Command::Random { explain } => {
            let mut rng = TinyRng::from_seed(clock_seed());
            println!("{}", read::random(&mut session, &mut rng, explain)?);
        }
        Command::Show { number, explain } => {
            println!("{}", read::show(&mut session, number, explain)?);
        }
        Command::Search { query } => println!("{}", read::search(&session, &query)),
        Command::Chapters => println!("{}", read::chapters(&session)),
        Command::Chapter { name } => println!("{}", read::chapter(&session, &name)?),
        Command::Quiz { kind, seed } => {
            let kind = kind.unwrap_or(QuestionKind::MissingWord);
            let seed = seed.unwrap_or_else(clock_seed);
            run_quiz(
                &mut session,
                kind,
                seed,
                &mut stdin().lock(),
                &mut stdout(),
            )?;
        }
        Command::Stats => println!("{}", render_stats(session.state.settings())),
        Command::History => println!("{}", read::history(&session)),
        Command::Favorites => println!("{}", read::favorites(&session)),
        Command::Favorite { number } => {
            println!("{}", read::toggle_favorite(&mut session, number)?);
        }
        Command::Share { number } => {
            read::share(&session, number, &mut PrintSharer::new(stdout()))?;
        }
    }
    Ok(())
}
