//! Text console front end
//!
//! `Console` reads lines from any `BufRead` and writes to any `Write`, so the
//! same code drives stdin/stdout and in-memory buffers in tests.

mod headless;

pub use headless::Headless;

use crate::core::{Code, MAX_TURNS, TurnRecord};
use crate::game::{CodeRequest, GameInterface, GameOutcome, Player, Role};
use crate::output::formatters::{clue_markers, exact_peg, partial_peg};
use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

/// Interactive console over an input and an output stream
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying streams
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the rules of the game
    ///
    /// # Errors
    /// Returns an error if output cannot be written.
    pub fn print_instructions(&mut self) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "{}", "Mastermind - Game Rules:".bold())?;
        writeln!(out)?;
        writeln!(
            out,
            "In this game against the computer, you can either be the code maker or breaker."
        )?;
        writeln!(
            out,
            "The code maker picks a secret code composed of 4 numbers from 1 to 6, eg: 4521."
        )?;
        writeln!(
            out,
            "To win, the code breaker must guess the code in {MAX_TURNS} turns or less."
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "After each turn, the breaker will be presented with clues to help them find the code:"
        )?;
        writeln!(
            out,
            "{} A red peg means you have one correct number in its correct location",
            exact_peg()
        )?;
        writeln!(
            out,
            "{} A white peg means you have one correct number, in an incorrect location",
            partial_peg()
        )?;
        writeln!(out)?;
        Ok(())
    }

    /// Ask which role the human wants to play
    ///
    /// # Errors
    /// Returns an error if input closes before `B` or `M` is entered.
    pub fn read_role(&mut self) -> Result<Role> {
        let role = self.prompt_until(
            "Time to play! Would you like to be the breaker or the maker? \
             (Input B to be the breaker and M to be the maker):",
            "Please pick either 'B' or 'M':",
            Role::parse,
        )?;
        writeln!(self.output)?;
        Ok(role)
    }

    /// Print `prompt`, then keep reading lines until `parse` accepts one
    ///
    /// Only the line terminator is stripped; any other whitespace is part of
    /// the entry and makes it invalid.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        writeln!(self.output, "{prompt}")?;
        loop {
            self.output.flush()?;
            let line = self.read_line()?;
            let entry = line.trim_end_matches(['\r', '\n']);
            if let Some(value) = parse(entry) {
                return Ok(value);
            }
            debug!("rejected input {entry:?}");
            writeln!(self.output, "{retry}")?;
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("input closed before a valid entry was made");
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> GameInterface for Console<R, W> {
    fn read_code(&mut self, request: CodeRequest) -> Result<Code> {
        let (prompt, retry) = match request {
            CodeRequest::Secret => (
                "Please enter your secret code:".to_string(),
                "Please enter a valid code (4 numbers from 1 to 6):",
            ),
            CodeRequest::Guess { turn } => (
                format!("Turn {turn}/{MAX_TURNS} - Please enter your code guess:"),
                "Please enter a valid guess (4 numbers from 1 to 6):",
            ),
        };
        self.prompt_until(&prompt, retry, |line| Code::new(line).ok())
    }

    fn show_guess(&mut self, turn: usize, guess: Code) -> Result<()> {
        writeln!(
            self.output,
            "Computer guess #{turn}: {}",
            guess.to_string().bright_yellow().bold()
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn show_clues(&mut self, record: &TurnRecord) -> Result<()> {
        writeln!(self.output, "Clues: {}", clue_markers(record.feedback))?;
        Ok(())
    }

    fn show_outcome(&mut self, outcome: &GameOutcome) -> Result<()> {
        let out = &mut self.output;
        writeln!(out)?;
        match (outcome.is_won(), outcome.breaker) {
            (true, Player::Human) => {
                let turns = outcome.turns;
                writeln!(
                    out,
                    "{}",
                    "Congratulations, you've found the secret code!"
                        .bright_green()
                        .bold()
                )?;
                writeln!(
                    out,
                    "It took you {turns} {}.",
                    if turns == 1 { "turn" } else { "turns" }
                )?;
            }
            (true, Player::Computer) => {
                let turns = outcome.turns;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "The computer found your secret code in {turns} {}!",
                        if turns == 1 { "turn" } else { "turns" }
                    )
                    .bright_green()
                    .bold()
                )?;
            }
            (false, player) => {
                let who = match player {
                    Player::Human => "You",
                    Player::Computer => "The computer",
                };
                writeln!(
                    out,
                    "{}",
                    format!("{who} couldn't find the secret code...").red().bold()
                )?;
                writeln!(
                    out,
                    "It was {}!",
                    outcome.secret.to_string().bright_yellow().bold()
                )?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::game::GameResult;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    #[test]
    fn read_role_accepts_either_case() {
        assert_eq!(console("b\n").read_role().unwrap(), Role::Breaker);
        assert_eq!(console("M\n").read_role().unwrap(), Role::Maker);
    }

    #[test]
    fn read_role_reprompts_until_valid() {
        let mut ui = console("x\nbreaker\n\nm\n");
        assert_eq!(ui.read_role().unwrap(), Role::Maker);

        let text = output(ui);
        assert_eq!(text.matches("Please pick either 'B' or 'M':").count(), 3);
    }

    #[test]
    fn read_role_rejects_padded_choice() {
        let mut ui = console("  b \nb \n M\nM\n");
        assert_eq!(ui.read_role().unwrap(), Role::Maker);

        let text = output(ui);
        assert_eq!(text.matches("Please pick either 'B' or 'M':").count(), 3);
    }

    #[test]
    fn read_role_fails_on_closed_input() {
        let err = console("q\n").read_role().unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn read_code_accepts_valid_guess() {
        let mut ui = console("4521\n");
        let guess = ui.read_code(CodeRequest::Guess { turn: 3 }).unwrap();

        assert_eq!(guess, code("4521"));
        assert!(output(ui).contains("Turn 3/12 - Please enter your code guess:"));
    }

    #[test]
    fn read_code_strips_line_endings() {
        let mut ui = console("1234\r\n");
        assert_eq!(ui.read_code(CodeRequest::Secret).unwrap(), code("1234"));
    }

    #[test]
    fn read_code_rejects_padded_code() {
        let mut ui = console(" 1234 \n1234 \n\t1234\n5555\n");
        let secret = ui.read_code(CodeRequest::Secret).unwrap();

        assert_eq!(secret, code("5555"));
        assert_eq!(output(ui).matches("Please enter a valid code").count(), 3);
    }

    #[test]
    fn read_code_rejects_malformed_lines() {
        let mut ui = console("123\n12345\n1237\nabcd\n0123\n6543\n");
        let secret = ui.read_code(CodeRequest::Secret).unwrap();

        assert_eq!(secret, code("6543"));
        let text = output(ui);
        assert!(text.contains("Please enter your secret code:"));
        assert_eq!(text.matches("Please enter a valid code").count(), 5);
    }

    #[test]
    fn read_code_fails_when_input_runs_out() {
        let mut ui = console("9999\n");
        assert!(ui.read_code(CodeRequest::Guess { turn: 1 }).is_err());
    }

    #[test]
    fn show_clues_prints_one_marker_per_match() {
        let mut ui = console("");
        let record = TurnRecord::new(code("4512"), Feedback::new(2, 1));
        ui.show_clues(&record).unwrap();

        let text = output(ui);
        assert!(text.starts_with("Clues: "));
        assert_eq!(text.matches('●').count(), 2);
        assert_eq!(text.matches('○').count(), 1);
    }

    #[test]
    fn show_clues_with_no_matches() {
        let mut ui = console("");
        let record = TurnRecord::new(code("5656"), Feedback::new(0, 0));
        ui.show_clues(&record).unwrap();

        let text = output(ui);
        assert!(!text.contains('●'));
        assert!(!text.contains('○'));
    }

    #[test]
    fn show_guess_announces_turn() {
        let mut ui = console("");
        ui.show_guess(2, code("1233")).unwrap();
        let text = output(ui);
        assert!(text.contains("Computer guess #2: "));
        assert!(text.contains("1233"));
    }

    fn outcome(result: GameResult, breaker: Player, turns: usize) -> GameOutcome {
        GameOutcome {
            result,
            turns,
            secret: code("1234"),
            breaker,
            history: Vec::new(),
        }
    }

    #[test]
    fn show_outcome_human_win() {
        let mut ui = console("");
        ui.show_outcome(&outcome(GameResult::Won, Player::Human, 4))
            .unwrap();
        let text = output(ui);
        assert!(text.contains("Congratulations, you've found the secret code!"));
        assert!(text.contains("4 turns"));
    }

    #[test]
    fn show_outcome_computer_win_reports_turns() {
        let mut ui = console("");
        ui.show_outcome(&outcome(GameResult::Won, Player::Computer, 5))
            .unwrap();
        assert!(output(ui).contains("in 5 turns!"));
    }

    #[test]
    fn show_outcome_loss_reveals_secret() {
        let mut ui = console("");
        ui.show_outcome(&outcome(GameResult::Exhausted, Player::Human, 12))
            .unwrap();
        let text = output(ui);
        assert!(text.contains("You couldn't find the secret code..."));
        assert!(text.contains("1234"));
    }

    #[test]
    fn instructions_mention_both_pegs() {
        let mut ui = console("");
        ui.print_instructions().unwrap();
        let text = output(ui);
        assert!(text.contains("Mastermind - Game Rules:"));
        assert!(text.contains("12 turns or less"));
        assert!(text.contains('●'));
        assert!(text.contains('○'));
    }
}
