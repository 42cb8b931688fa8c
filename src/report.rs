//! Text and JSON reports for the `eval` command.

use serde::Serialize;
use tictac_core::{Board, Mark, Outcome, evaluate};
use tracing::instrument;

/// A parsed board together with its evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Board rendered as three `X|O|.` lines.
    pub board: String,
    /// Mark to move next, inferred from the mark counts.
    pub turn: Mark,
    /// Classification of the board.
    pub outcome: Outcome,
}

impl EvalReport {
    /// Parses `input` and evaluates it.
    #[instrument]
    pub fn from_input(input: &str) -> anyhow::Result<Self> {
        let board: Board = input.parse()?;
        Ok(Self {
            board: board.to_string(),
            turn: board.turn(),
            outcome: evaluate(&board),
        })
    }

    /// Human-readable form.
    pub fn to_text(&self) -> String {
        let verdict = match self.outcome {
            Outcome::Undecided => format!("Undecided, {} to move", self.turn),
            other => other.to_string(),
        };
        format!("{}\n\n{}", self.board, verdict)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_for_win() {
        let report = EvalReport::from_input("XXX OO. ...").unwrap();
        assert_eq!(
            report.to_text(),
            "X|X|X\nO|O|.\n.|.|.\n\nX wins on (0, 0) (0, 1) (0, 2)"
        );
    }

    #[test]
    fn test_text_report_for_undecided() {
        let report = EvalReport::from_input("X.. ... ...").unwrap();
        assert!(report.to_text().ends_with("Undecided, O to move"));
    }

    #[test]
    fn test_json_report() {
        let report = EvalReport::from_input("XOX XOO OXX").unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["outcome"]["outcome"], "stalemate");
        assert_eq!(value["turn"], "Second");
    }

    #[test]
    fn test_bad_input_is_an_error() {
        let err = EvalReport::from_input("XO?").unwrap_err();
        assert!(err.to_string().contains("Unexpected character"));
    }
}
