//! Read-eval loop driving a [`RobotEngine`] from text input.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use robocity_core::{ExecutionOutcome, Instruction, Interpreter, RobotEngine};

use crate::config::ConsoleConfig;
use crate::console::Console;

pub const UNDO_HELP: &str = "UNDO | DESHACER";

fn is_undo(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("UNDO") || line.eq_ignore_ascii_case("DESHACER")
}

pub struct ConsoleController<W: Write + 'static> {
    engine: RobotEngine,
    interpreter: Interpreter,
    console: Rc<RefCell<Console<W>>>,
    prompt: String,
}

impl<W: Write + 'static> ConsoleController<W> {
    /// Registers one console as the navigation, engine and inventory observer.
    pub fn new(mut engine: RobotEngine, out: W, config: &ConsoleConfig) -> Self {
        let console = Rc::new(RefCell::new(Console::new(out, config)));
        engine.add_navigation_observer(console.clone());
        engine.add_engine_observer(console.clone());
        engine.add_inventory_observer(console.clone());
        Self {
            engine,
            interpreter: Interpreter::new(),
            console,
            prompt: config.prompt.clone(),
        }
    }

    pub fn engine(&self) -> &RobotEngine {
        &self.engine
    }

    pub fn console(&self) -> &Rc<RefCell<Console<W>>> {
        &self.console
    }

    /// Play until the run is over. End of input counts as `QUIT`.
    pub fn run_game(&mut self, input: impl BufRead) -> io::Result<()> {
        self.engine.init_navigation();
        self.engine.request_start();
        self.check_output()?;

        let mut lines = input.lines();
        while !self.engine.is_over() {
            self.console.borrow_mut().prompt(&self.prompt);
            self.check_output()?;
            match lines.next() {
                Some(line) => {
                    self.handle_line(&line?);
                }
                None => {
                    tracing::debug!("input closed");
                    self.engine.execute(Instruction::Quit);
                }
            }
            self.check_output()?;
        }
        Ok(())
    }

    /// Run one line of input: an undo request or an instruction.
    pub fn handle_line(&mut self, line: &str) -> ExecutionOutcome {
        if is_undo(line) {
            return self.engine.execute_undo();
        }
        match self.interpreter.generate_instruction(line) {
            Ok(instruction) => self.engine.execute(instruction),
            Err(err) => {
                tracing::debug!(line, "unrecognised instruction");
                self.engine.request_error(&err.to_string());
                self.console.borrow_mut().help(err.help());
                ExecutionOutcome::Failed
            }
        }
    }

    fn check_output(&self) -> io::Result<()> {
        match self.console.borrow_mut().take_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
