use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use crate::game::GameModel;

use super::agent::Agent;

/// The human player: prompts for a 1-based column on the terminal and keeps
/// re-prompting until a legal one is entered. Invalid input never escapes
/// this type; the contract with the driver is a legal column or nothing.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    pub fn from_stdio() -> Self {
        HumanPlayer {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanPlayer { input, output }
    }
}

impl<R: BufRead, W: Write> Agent for HumanPlayer<R, W> {
    fn get_move(&mut self, model: &GameModel) -> usize {
        let valid = model.get_valid_moves();

        loop {
            let _ = write!(self.output, "Enter column (1-7): ");
            let _ = self.output.flush();

            let mut line = String::new();
            let read = self.input.read_line(&mut line).unwrap_or(0);
            if read == 0 {
                panic!("input stream closed while waiting for a move");
            }

            let column = match line.trim().parse::<usize>() {
                Ok(n) if (1..=7).contains(&n) => n - 1,
                _ => {
                    let _ = writeln!(self.output, "Invalid input.");
                    continue;
                }
            };

            if valid[column] {
                return column;
            }
            let _ = writeln!(self.output, "That column is full. Pick again.");
        }
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "Human"
    }
}
