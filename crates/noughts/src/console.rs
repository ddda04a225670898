//! Text rendering and line input over generic reader/writer handles.

use crate::config::Symbols;
use anyhow::{Context, Result, bail};
use noughts_core::{Board, Cell, Mark, Move};
use std::io::{BufRead, Write};

/// Console handles plus the symbols to draw marks with.
pub struct Console<R, W> {
    input: R,
    output: W,
    symbols: Symbols,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given handles.
    pub fn new(input: R, output: W, symbols: Symbols) -> Self {
        Self {
            input,
            output,
            symbols,
        }
    }

    /// Symbol for `mark`.
    pub fn symbol(&self, mark: Mark) -> &str {
        self.symbols.of(mark)
    }

    /// Prints the board after an empty line. Empty cells show their number.
    pub fn render(&mut self, board: &Board) -> Result<()> {
        let text = render_board(board, &self.symbols);
        writeln!(self.output)?;
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Writes `text` and reads one line of input, without the line ending.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Consumes the console, returning the output handle.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Draws the board as three ` | `-separated rows.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut text = String::new();
    for (r, row) in board.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| match cell {
                Cell::Empty => Move::new(r, c).cell_number().to_string(),
                Cell::Occupied(mark) => symbols.of(*mark).to_string(),
            })
            .collect();
        text.push_str(&cells.join(" | "));
        text.push('\n');
    }
    text
}

/// Parses a console cell number, `None` unless it names a cell 1-9.
pub fn parse_cell_number(input: &str) -> Option<Move> {
    let number = input.trim().parse::<usize>().ok()?;
    Move::from_cell_number(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::new(), &Symbols::default());
        assert_eq!(text, "1 | 2 | 3\n4 | 5 | 6\n7 | 8 | 9\n");
    }

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.place(Move::new(0, 0), Mark::Nought).unwrap();
        board.place(Move::new(1, 1), Mark::Cross).unwrap();
        let text = render_board(&board, &Symbols::new("O", "X"));
        assert_eq!(text, "O | 2 | 3\n4 | X | 6\n7 | 8 | 9\n");
    }

    #[test]
    fn test_parse_cell_number() {
        assert_eq!(parse_cell_number(" 5 "), Some(Move::new(1, 1)));
        assert_eq!(parse_cell_number("0"), None);
        assert_eq!(parse_cell_number("12"), None);
        assert_eq!(parse_cell_number("-3"), None);
        assert_eq!(parse_cell_number("center"), None);
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut console = Console::new(Cursor::new("7\r\nrest\n"), Vec::new(), Symbols::default());
        assert_eq!(console.prompt("> ").unwrap(), "7");
        assert_eq!(console.prompt("> ").unwrap(), "rest");
        assert!(console.prompt("> ").is_err());
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > ");
    }
}
