use std::io::{self, BufRead, Write};

use crate::game::{GameState, Player};

use super::agent::Agent;

/// An agent driven by keyboard input: prompts for a column number on
/// stdin and re-prompts until the input parses and names a legal column.
pub struct HumanAgent;

/// Parse one line of input into a legal column, or explain what went
/// wrong. Split out from the prompt loop so it can be tested.
fn parse_column(input: &str, legal: &[usize]) -> Result<usize, String> {
    let col: usize = input
        .trim()
        .parse()
        .map_err(|_| "unable to parse input".to_string())?;
    if legal.contains(&col) {
        Ok(col)
    } else {
        Err(format!("column {col} is not a legal move"))
    }
}

impl Agent for HumanAgent {
    fn initialize(&mut self, _role: Player) {}

    fn play(&mut self, state: &GameState) -> usize {
        let legal = state.legal_moves();
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("Enter a column number {legal:?}: ");
            let _ = io::stdout().flush();
            let line = lines
                .next()
                .expect("stdin closed while waiting for a move")
                .expect("failed to read from stdin");
            match parse_column(&line, &legal) {
                Ok(col) => return col,
                Err(msg) => println!("{msg}"),
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_column() {
        assert_eq!(parse_column("3", &[0, 1, 2, 3]), Ok(3));
        assert_eq!(parse_column("  5 \n", &[5]), Ok(5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_column("abc", &[0, 1, 2]).is_err());
        assert!(parse_column("", &[0, 1, 2]).is_err());
        assert!(parse_column("-1", &[0, 1, 2]).is_err());
    }

    #[test]
    fn test_parse_rejects_illegal_column() {
        assert!(parse_column("6", &[0, 1, 2]).is_err());
    }
}
