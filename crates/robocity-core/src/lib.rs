//! `robocity-core`: turn-based robot simulation kernel.
//!
//! A robot walks a [`City`] of places joined by streets, carries items in an [`ItemContainer`],
//! burns fuel on every move and turn, and stops when it reaches the spaceship, runs dry, or is
//! told to quit. Commands are parsed by the [`Interpreter`] into [`Instruction`]s that the
//! [`RobotEngine`] executes and can undo one at a time.
//!
//! Front ends never receive mutable state. They register observers
//! ([`NavigationObserver`], [`RobotEngineObserver`], [`InventoryObserver`]) and render the
//! snapshots those receive.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod city;
pub mod direction;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod interpreter;
pub mod items;
pub mod navigation;
pub mod observer;
pub mod testing;

pub use city::{City, Place, PlaceId, PlaceView, Street};
pub use direction::{Direction, Rotation};
pub use engine::{EngineConfig, ExecutionContext, ExecutionOutcome, RobotEngine, RobotState};
pub use error::{ExecutionError, FormatError};
pub use instructions::{Instruction, InstructionKind, Operate};
pub use interpreter::{HelpText, Interpreter};
pub use items::{Item, ItemContainer, ItemKey, ItemKind};
pub use navigation::NavigationModule;
pub use observer::{InventoryObserver, NavigationObserver, Observers, RobotEngineObserver};
