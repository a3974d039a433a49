//! Turns command lines into [`Instruction`]s.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FormatError, Instruction, InstructionKind};

/// Grammar listing of a set of instructions, one line per instruction. Renderers choose the
/// layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HelpText {
    pub header: String,
    pub lines: Vec<String>,
}

impl HelpText {
    pub const HEADER: &'static str = "The valid instructions are:";

    pub fn for_kinds(kinds: &[InstructionKind]) -> Self {
        Self {
            header: Self::HEADER.to_owned(),
            lines: kinds.iter().map(|k| k.help().to_owned()).collect(),
        }
    }

    /// Help for every instruction, in interpreter priority order.
    pub fn all() -> Self {
        Self::for_kinds(&InstructionKind::PRIORITY)
    }
}

/// Registry of instruction grammars tried in order; the first match wins.
#[derive(Debug, Clone)]
pub struct Interpreter {
    registry: Vec<InstructionKind>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self {
            registry: InstructionKind::PRIORITY.to_vec(),
        }
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter that only knows `kinds`, tried in the given order.
    pub fn with_registry(kinds: impl IntoIterator<Item = InstructionKind>) -> Self {
        Self {
            registry: kinds.into_iter().collect(),
        }
    }

    pub fn registry(&self) -> &[InstructionKind] {
        &self.registry
    }

    pub fn help(&self) -> HelpText {
        HelpText::for_kinds(&self.registry)
    }

    pub fn generate_instruction(&self, line: &str) -> Result<Instruction, FormatError> {
        let instruction = self.registry.iter().find_map(|kind| kind.parse(line));
        match instruction {
            Some(instruction) => {
                tracing::trace!(instruction = %instruction.kind(), "line parsed");
                Ok(instruction)
            }
            None => Err(FormatError::NoMatch {
                line: line.trim().to_owned(),
                help: self.help(),
            }),
        }
    }
}
