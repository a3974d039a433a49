//! Parsed commands and their execute/undo behaviour.
//!
//! An [`Instruction`] only holds what was parsed from the command line. Everything it touches is
//! passed in through an [`ExecutionContext`] when it runs, so the same value can later be undone.

mod handling;
mod kind;
mod movement;
mod session;

pub use kind::InstructionKind;

use crate::{ExecutionContext, ExecutionError, Item, Rotation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Move,
    Turn(Rotation),
    Pick(String),
    Drop(String),
    Operate(Operate),
    /// Describe one carried item, or the whole inventory when `None`.
    Scan(Option<String>),
    Radar,
    Help,
    Quit,
}

/// Parameters of an `OPERATE` plus the used item, remembered for undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operate {
    id: String,
    used: Option<Item>,
}

impl Operate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            used: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The item as it was right after the last successful use.
    pub fn used(&self) -> Option<&Item> {
        self.used.as_ref()
    }
}

impl Instruction {
    pub fn operate(id: impl Into<String>) -> Self {
        Instruction::Operate(Operate::new(id))
    }

    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::Move => InstructionKind::Move,
            Instruction::Turn(_) => InstructionKind::Turn,
            Instruction::Pick(_) => InstructionKind::Pick,
            Instruction::Drop(_) => InstructionKind::Drop,
            Instruction::Operate(_) => InstructionKind::Operate,
            Instruction::Scan(_) => InstructionKind::Scan,
            Instruction::Radar => InstructionKind::Radar,
            Instruction::Help => InstructionKind::Help,
            Instruction::Quit => InstructionKind::Quit,
        }
    }

    pub fn help(&self) -> &'static str {
        self.kind().help()
    }

    pub fn execute(&mut self, ctx: &mut ExecutionContext<'_>) -> Result<(), ExecutionError> {
        match self {
            Instruction::Move => movement::move_forward(ctx),
            Instruction::Turn(rotation) => {
                movement::turn(ctx, *rotation);
                Ok(())
            }
            Instruction::Pick(id) => handling::pick(ctx, id),
            Instruction::Drop(id) => handling::drop(ctx, id),
            Instruction::Operate(operate) => handling::operate(ctx, operate),
            Instruction::Scan(id) => session::scan(ctx, id.as_deref()),
            Instruction::Radar => {
                ctx.navigation.scan_current_place();
                Ok(())
            }
            Instruction::Help => {
                ctx.robot.request_help();
                Ok(())
            }
            Instruction::Quit => {
                ctx.robot.request_quit();
                Ok(())
            }
        }
    }

    /// Reverse a previous successful [`Instruction::execute`].
    pub fn execute_undo(&mut self, ctx: &mut ExecutionContext<'_>) -> Result<(), ExecutionError> {
        match self {
            Instruction::Move => movement::move_back(ctx),
            Instruction::Turn(rotation) => {
                movement::turn_back(ctx, *rotation);
                Ok(())
            }
            // Each is the other's inverse.
            Instruction::Pick(id) => handling::drop(ctx, id),
            Instruction::Drop(id) => handling::pick(ctx, id),
            Instruction::Operate(operate) => handling::operate_undo(ctx, operate),
            Instruction::Scan(_) | Instruction::Radar | Instruction::Help | Instruction::Quit => {
                Ok(())
            }
        }
    }
}
