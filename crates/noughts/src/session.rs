//! Menu, turn loop and replay prompt.

use crate::config::{Mode, Settings};
use crate::console::{Console, parse_cell_number};
use anyhow::{Context, Result};
use noughts_core::{GameState, Mark, MoveError, Outcome, search};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const MENU: &str =
    "Welcome to Tic Tac Toe!\n'a': Play with AI. 'any other keys': Play with player 2.\n";
const REPLAY: &str = "'r': Try again! 'any other keys': quit";

/// One console session: menu, games, replays.
pub struct Session<R, W> {
    console: Console<R, W>,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given console handles.
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        let console = Console::new(input, output, settings.symbols().clone());
        Self { console, settings }
    }

    /// Plays games until the player declines a replay.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            let mode = match *self.settings.mode() {
                Some(mode) => mode,
                None => self.menu()?,
            };
            self.play(mode)?;
            if !self.settings.replay() || !self.ask_replay()? {
                info!("Session finished");
                return Ok(());
            }
        }
    }

    /// Asks for the game mode.
    pub fn menu(&mut self) -> Result<Mode> {
        let answer = self.console.prompt(MENU)?;
        let mode = if answer.trim().eq_ignore_ascii_case("a") {
            Mode::Ai
        } else {
            Mode::Pvp
        };
        debug!(%mode, "Mode selected");
        Ok(mode)
    }

    /// Plays one game to completion and announces the result.
    #[instrument(skip(self))]
    pub fn play(&mut self, mode: Mode) -> Result<Outcome> {
        let computer = (mode == Mode::Ai).then(|| self.settings.computer().mark());
        let mut state = GameState::new();
        info!(?computer, "Game started");

        loop {
            self.console.render(state.board())?;
            let side = state.side_to_move();
            if Some(side) == computer {
                self.computer_turn(&mut state, side)?;
            } else {
                self.human_turn(&mut state, side)?;
            }

            let outcome = state.evaluate();
            match outcome {
                Outcome::Ongoing => continue,
                Outcome::Win(mark) => {
                    self.console.render(state.board())?;
                    let symbol = self.console.symbol(mark).to_string();
                    if Some(mark) == computer {
                        self.console.say(format!("Player AI ('{}') win.", symbol))?;
                    } else {
                        self.console
                            .say(format!("Player {} ({}) win.", mark.seat() + 1, symbol))?;
                    }
                }
                Outcome::Draw => {
                    self.console.render(state.board())?;
                    self.console.say("Draw!\n")?;
                }
            }
            info!(%outcome, plies = state.plies(), "Game over");
            return Ok(outcome);
        }
    }

    fn computer_turn(&mut self, state: &mut GameState, side: Mark) -> Result<()> {
        let mv = search::best_move(state).context("AI asked to move in a finished game")?;
        state.apply_player_move(mv, side)?;
        let symbol = self.console.symbol(side).to_string();
        self.console
            .say(format!("AI placed {} on {}.", symbol, mv.cell_number()))?;
        Ok(())
    }

    fn human_turn(&mut self, state: &mut GameState, side: Mark) -> Result<()> {
        let symbol = self.console.symbol(side).to_string();
        let player = side.seat() + 1;
        let prompt = format!(
            "Player {}'s turn. Please place {} on the number:",
            player, symbol
        );

        loop {
            let answer = self.console.prompt(&prompt)?;
            if let Some(mv) = parse_cell_number(&answer) {
                match state.apply_player_move(mv, side) {
                    Ok(()) => {
                        self.console.say(format!(
                            "Player {} placed {} on {}.",
                            player,
                            symbol,
                            mv.cell_number()
                        ))?;
                        return Ok(());
                    }
                    Err(MoveError::Occupied(_) | MoveError::OutOfRange { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }

            debug!(%answer, "Invalid move input");
            let valid: Vec<usize> = state.board().empty_cells().map(|mv| mv.cell_number()).collect();
            self.console.render(state.board())?;
            self.console
                .say(format!("Invalid move. Please input a number in {:?}.\n", valid))?;
        }
    }

    fn ask_replay(&mut self) -> Result<bool> {
        let answer = self.console.prompt(REPLAY)?;
        Ok(answer.trim().eq_ignore_ascii_case("r"))
    }

    /// Consumes the session, returning the output handle.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
