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

use std::collections::HashSet;
use std::io::BufRead;
use std::io::Write;

use kural_core::Action;
use kural_core::Question;
use kural_core::QuestionKind;
use kural_core::QuizGenerator;
use kural_core::TinyRng;
use kural_core::error::Fallible;
use kural_core::error::fail;

use crate::cmd::Session;

/// Ask one question on `output`, read the answer from `input`, and record
/// the result. Returns whether the answer was correct.
pub fn run_quiz(
    session: &mut Session,
    kind: QuestionKind,
    seed: u64,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Fallible<bool> {
    let mut rng = TinyRng::from_seed(seed);
    let question = QuizGenerator::new(&session.corpus).generate(kind, &mut rng)?;

    writeln!(output, "{}: {}\n", kind.title(), kind.instruction())?;
    writeln!(output, "{}\n", question.prompt)?;
    match question.jumbled_words() {
        None => {
            for (i, option) in question.options().iter().enumerate() {
                writeln!(output, "  {}. {}", i + 1, option)?;
            }
            write!(output, "\nYour answer (1-{}): ", question.options().len())?;
        }
        Some(words) => {
            for (i, word) in words.iter().enumerate() {
                writeln!(output, "  {}. {}", i + 1, word)?;
            }
            write!(output, "\nWord numbers in order, separated by spaces: ")?;
        }
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let correct = grade(&question, &line)?;
    session.state.dispatch(Action::RecordQuizAnswer(correct));

    if correct {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(output, "Not quite. The answer was:\n{}", answer_text(&question))?;
    }
    let stats = session.state.settings().progress().quiz_stats();
    writeln!(
        output,
        "Score: {}/{}, streak {}",
        stats.correct_answers(),
        stats.total_answered(),
        stats.current_streak()
    )?;
    Ok(correct)
}

/// Grade a line of user input. Malformed input is an error, not a wrong
/// answer, and is not recorded.
fn grade(question: &Question, line: &str) -> Fallible<bool> {
    match question.jumbled_words() {
        None => {
            let count = question.options().len();
            let choice = parse_number(line.trim(), count)?;
            Ok(question.is_correct_choice(choice))
        }
        Some(words) => {
            let mut used = HashSet::new();
            let mut order = Vec::with_capacity(words.len());
            for token in line.split_whitespace() {
                let index = parse_number(token, words.len())?;
                if !used.insert(index) {
                    return fail(format!("word {} was used twice.", index + 1));
                }
                order.push(words[index].as_str());
            }
            if order.len() != words.len() {
                return fail(format!("expected {} word numbers.", words.len()));
            }
            Ok(question.is_correct_sequence(&order))
        }
    }
}

/// Parse a 1-based number in `1..=count` into a 0-based index.
fn parse_number(token: &str, count: usize) -> Fallible<usize> {
    match token.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => fail(format!("expected a number between 1 and {count}.")),
    }
}

fn answer_text(question: &Question) -> String {
    match question.jumbled_words() {
        None => {
            let index = question.correct_index() as usize;
            question.options()[index].clone()
        }
        Some(_) => question.entry.verse(),
    }
}
