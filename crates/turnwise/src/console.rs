//! Line-oriented prompting over any reader/writer pair.
//!
//! Every prompt loops until it gets an acceptable answer. End of input is
//! reported as `Ok(None)` so the session can wind down cleanly.

use crate::display::{clear_screen, joinor, render_board, render_markers};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use turnwise_tictactoe::{Board, EngineError, HumanMoveSource, Marker, Player, Position};

/// Console front-end: reads answers from `input`, writes prompts to `output`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `clear` enables screen clearing between turns.
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
            closed: false,
        }
    }

    /// True once the input has reached end of file.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> std::io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Clears the screen when clearing is enabled.
    pub fn clear(&mut self) -> std::io::Result<()> {
        if self.clear {
            clear_screen(&mut self.output)?;
        }
        Ok(())
    }

    /// Reads one line without its terminator; `None` at end of input.
    #[instrument(skip(self))]
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts until `parse` accepts an answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        retry: Option<&str>,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> std::io::Result<Option<T>> {
        self.say(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            match retry {
                Some(msg) => self.say(msg)?,
                None => self.say(prompt)?,
            }
        }
    }

    /// Asks for the player's name until a non-blank one is given.
    #[instrument(skip(self))]
    pub fn ask_name(&mut self) -> std::io::Result<Option<String>> {
        self.ask("Please enter your name.", None, |line| {
            let name = line.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
    }

    /// Asks which marker the player wants.
    #[instrument(skip(self))]
    pub fn ask_marker(&mut self) -> std::io::Result<Option<Marker>> {
        self.ask(
            "Choose X or O",
            Some("Sorry, you must input X or O."),
            |line| line.parse::<Marker>().ok(),
        )
    }

    /// Asks a y/n question.
    #[instrument(skip(self))]
    pub fn ask_yes_no(&mut self, question: &str) -> std::io::Result<Option<bool>> {
        self.ask(question, Some("Sorry, must input y or n."), |line| {
            match line.trim().to_ascii_lowercase().as_str() {
                "y" => Some(true),
                "n" => Some(false),
                _ => None,
            }
        })
    }

    /// Clears the screen and shows the marker line and board.
    pub fn show_board(&mut self, board: &Board, human: &Player, computer: &Player) -> std::io::Result<()> {
        self.clear()?;
        self.say(render_markers(human, computer))?;
        self.say("")?;
        write!(self.output, "{}", render_board(board))?;
        self.say("")
    }

    /// Asks for a square until an unmarked one is named.
    #[instrument(skip_all)]
    pub fn ask_position(&mut self, board: &Board) -> std::io::Result<Option<Position>> {
        let open = board.unmarked_positions();
        let prompt = format!("Choose a square ({}):", joinor(&open));
        self.ask(&prompt, Some("Sorry, that's not a valid choice."), |line| {
            Position::parse_id(line).filter(|pos| open.contains(pos))
        })
    }
}

impl<R: BufRead, W: Write> HumanMoveSource for Console<R, W> {
    fn choose_position(
        &mut self,
        board: &Board,
        human: &Player,
        computer: &Player,
    ) -> Result<Position, EngineError> {
        let io = |e: std::io::Error| EngineError::MoveSource(e.to_string());
        self.show_board(board, human, computer).map_err(io)?;
        self.ask_position(board)
            .map_err(io)?
            .ok_or_else(|| EngineError::MoveSource("input closed".to_string()))
    }
}
