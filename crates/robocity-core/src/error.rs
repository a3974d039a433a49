use thiserror::Error;

use crate::{Direction, HelpText};

/// Failure of an instruction or an undo. The engine turns these into `error_raised`
/// notifications; they never end the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("There is no street in direction {direction}")]
    NoStreet { direction: Direction },

    #[error("Arrggg, there is a door but it is closed!")]
    StreetClosed,

    #[error("You do not have any {id}.")]
    NotCarrying { id: String },

    #[error("The item already exists in this place")]
    AlreadyAtPlace { id: String },

    #[error("Ooops, this place has not the object {id}")]
    NotAtPlace { id: String },

    #[error("I am stupid! I already have the object {id}")]
    AlreadyCarrying { id: String },

    #[error("I have problems using the object {id}")]
    CannotUse { id: String },

    #[error("I am stupid. I have not {id}")]
    NotInInventory { id: String },

    #[error("I have not such object")]
    UnknownItem { id: String },

    #[error("My inventory is empty")]
    InventoryEmpty,

    #[error("No more instruction for Undo")]
    NothingToUndo,

    #[error("I have problems using the object {id}")]
    UndoFailed { id: String },
}

/// A command line no registered instruction understands.
///
/// The message is the single line naming the rejected input; renderers lay out [`FormatError::help`]
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid instruction: {line}")]
    NoMatch { line: String, help: HelpText },
}

impl FormatError {
    pub fn help(&self) -> &HelpText {
        match self {
            FormatError::NoMatch { help, .. } => help,
        }
    }
}
