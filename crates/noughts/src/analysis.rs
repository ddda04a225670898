//! One-shot position analysis for the `analyze` command.

use crate::config::Symbols;
use crate::console::render_board;
use anyhow::{Context, Result};
use noughts_core::search::{self, DRAW, WIN};
use noughts_core::{GameState, Move, SearchResult};
use std::io::Write;
use tracing::instrument;

/// Replays `cells` (console numbers 1-9, alternating from the first mover),
/// searches the position and writes a report.
#[instrument(skip(symbols, out))]
pub fn analyze_position<W: Write>(
    cells: &[usize],
    symbols: &Symbols,
    out: &mut W,
) -> Result<SearchResult> {
    let moves = cells
        .iter()
        .map(|&n| Move::from_cell_number(n).with_context(|| format!("No cell numbered {}", n)))
        .collect::<Result<Vec<_>>>()?;
    let mut state = GameState::from_moves(&moves).context("Illegal move sequence")?;
    let side = state.side_to_move();
    let result = search::analyze(&mut state);

    write!(out, "{}", render_board(state.board(), symbols))?;
    writeln!(out, "Outcome: {}", state.evaluate())?;
    let verdict = match result.value {
        WIN => "win",
        DRAW => "draw",
        _ => "loss",
    };
    writeln!(out, "Value for {}: {}", symbols.of(side), verdict)?;
    match result.best_move {
        Some(mv) => writeln!(
            out,
            "Best move: {} ({})",
            mv.cell_number(),
            mv.label().unwrap_or("off board")
        )?,
        None => writeln!(out, "Best move: none")?,
    }
    writeln!(out, "Positions searched: {}", result.nodes)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_winning_move() {
        let mut out = Vec::new();
        let result = analyze_position(&[1, 4, 2, 5], &Symbols::default(), &mut out).unwrap();
        assert_eq!(result.best_move, Some(Move::new(0, 2)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Value for ○: win"));
        assert!(text.contains("Best move: 3 (Top-right)"));
    }

    #[test]
    fn test_finished_position() {
        let mut out = Vec::new();
        let result = analyze_position(&[1, 4, 2, 5, 3], &Symbols::default(), &mut out).unwrap();
        assert_eq!(result.best_move, None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Outcome: ○ wins"));
        assert!(text.contains("Value for x: loss"));
    }

    #[test]
    fn test_rejects_repeated_cell() {
        let mut out = Vec::new();
        let err = analyze_position(&[5, 5], &Symbols::default(), &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("already occupied"));
    }

    #[test]
    fn test_rejects_unknown_cell() {
        let mut out = Vec::new();
        assert!(analyze_position(&[10], &Symbols::default(), &mut out).is_err());
    }
}
