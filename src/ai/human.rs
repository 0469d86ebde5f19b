use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::game::GameState;

use super::agent::Agent;

/// A player typing column numbers, one per line.
///
/// Invalid or illegal input is reported and asked for again. End of input
/// yields no move; so does a read error, which is kept for
/// [`Agent::take_input_error`].
pub struct HumanAgent<R, W> {
    input: Rc<RefCell<R>>,
    output: W,
    name: String,
    failure: Option<io::Error>,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self::shared(name, Rc::new(RefCell::new(input)), output)
    }

    /// Read from an input shared with other players, e.g. two humans on one
    /// terminal.
    pub fn shared(name: impl Into<String>, input: Rc<RefCell<R>>, output: W) -> Self {
        HumanAgent {
            input,
            output,
            name: name.into(),
            failure: None,
        }
    }

    fn prompt(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Ok(None);
        }

        write!(self.output, "{state}")?;
        loop {
            write!(self.output, "{} ({}) column {:?}: ", self.name, state.current_player(), legal)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.borrow_mut().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(col) if legal.contains(&col) => return Ok(Some(col)),
                Ok(col) => writeln!(self.output, "column {col} is not playable")?,
                Err(_) => writeln!(self.output, "enter a column number")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        match self.prompt(state) {
            Ok(choice) => choice,
            Err(err) => {
                log::warn!("reading move for {} failed: {err}", self.name);
                self.failure = Some(err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn take_input_error(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}
