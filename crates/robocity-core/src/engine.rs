//! The robot engine: counters, termination, and the undo history.

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::observer::{InventoryObserver, NavigationObserver, Observers, RobotEngineObserver};
use crate::{
    City, Direction, ExecutionError, HelpText, Instruction, ItemContainer, NavigationModule,
    Place, PlaceId,
};

/// Tunables for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Fuel after [`RobotEngine::request_start`].
    pub initial_fuel: i32,
    pub move_cost: i32,
    pub turn_cost: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_fuel: 100,
            move_cost: 5,
            turn_cost: 5,
        }
    }
}

/// Result of handing an instruction (or an undo) to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Executed,
    /// The failure was reported through `error_raised`.
    Failed,
}

impl ExecutionOutcome {
    pub fn is_executed(self) -> bool {
        self == ExecutionOutcome::Executed
    }
}

/// The counters and engine observers. Split from [`RobotEngine`] so instructions can borrow it
/// next to the navigation module and the inventory.
#[derive(Debug)]
pub struct RobotState {
    fuel: i32,
    recycled_material: i32,
    quit_requested: bool,
    config: EngineConfig,
    observers: Observers<dyn RobotEngineObserver>,
}

impl RobotState {
    fn new(config: EngineConfig) -> Self {
        Self {
            fuel: config.initial_fuel,
            recycled_material: 0,
            quit_requested: false,
            config,
            observers: Observers::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    pub fn recycled_material(&self) -> i32 {
        self.recycled_material
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Fuel never drops below zero.
    pub fn add_fuel(&mut self, delta: i32) {
        self.fuel = self.fuel.saturating_add(delta).max(0);
        self.state_updated();
    }

    pub fn add_recycled_material(&mut self, delta: i32) {
        self.recycled_material = self.recycled_material.saturating_add(delta);
        self.state_updated();
    }

    pub fn set_fuel(&mut self, fuel: i32) {
        self.fuel = fuel.max(0);
        self.state_updated();
    }

    pub fn set_recycled_material(&mut self, recycled_material: i32) {
        self.recycled_material = recycled_material;
        self.state_updated();
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn say_something(&self, message: &str) {
        self.observers.notify(|o| o.robot_speaks(message));
    }

    pub fn request_error(&self, message: &str) {
        self.observers.notify(|o| o.error_raised(message));
    }

    pub fn request_help(&self) {
        let help = HelpText::all();
        self.observers.notify(|o| o.help_requested(&help));
    }

    fn state_updated(&self) {
        let (fuel, recycled) = (self.fuel, self.recycled_material);
        self.observers.notify(|o| o.state_updated(fuel, recycled));
    }

    fn reset(&mut self) {
        self.fuel = self.config.initial_fuel;
        self.recycled_material = 0;
        self.quit_requested = false;
        self.state_updated();
    }
}

/// Disjoint mutable views of the engine handed to an executing instruction.
pub struct ExecutionContext<'a> {
    pub robot: &'a mut RobotState,
    pub navigation: &'a mut NavigationModule,
    pub inventory: &'a mut ItemContainer,
}

#[derive(Debug)]
pub struct RobotEngine {
    robot: RobotState,
    navigation: NavigationModule,
    inventory: ItemContainer,
    history: Vec<Instruction>,
}

impl RobotEngine {
    /// Engine with [`EngineConfig::default`].
    ///
    /// # Panics
    ///
    /// If `initial_place` was not handed out by `city`, as [`NavigationModule::new`].
    pub fn new(city: City, initial_place: PlaceId, heading: Direction) -> Self {
        Self::with_config(city, initial_place, heading, EngineConfig::default())
    }

    /// # Panics
    ///
    /// If `initial_place` was not handed out by `city`.
    pub fn with_config(
        city: City,
        initial_place: PlaceId,
        heading: Direction,
        config: EngineConfig,
    ) -> Self {
        Self {
            robot: RobotState::new(config),
            navigation: NavigationModule::new(city, initial_place, heading),
            inventory: ItemContainer::new(),
            history: Vec::new(),
        }
    }

    pub fn add_engine_observer(&mut self, observer: Rc<RefCell<dyn RobotEngineObserver>>) -> bool {
        self.robot.observers.add(observer)
    }

    pub fn add_navigation_observer(
        &mut self,
        observer: Rc<RefCell<dyn NavigationObserver>>,
    ) -> bool {
        self.navigation.add_observer(observer)
    }

    pub fn add_inventory_observer(
        &mut self,
        observer: Rc<RefCell<dyn InventoryObserver>>,
    ) -> bool {
        self.inventory.add_observer(observer)
    }

    /// Start (or restart) the run: full tank, no recycled material, quit flag cleared.
    pub fn request_start(&mut self) {
        tracing::debug!(fuel = self.robot.config.initial_fuel, "engine started");
        self.robot.reset();
    }

    pub fn init_navigation(&self) {
        self.navigation.init_navigation();
    }

    /// Publish the inventory and the counters, for front ends that are just starting.
    pub fn init_inventory(&self) {
        self.inventory.notify_changed();
        self.robot.state_updated();
    }

    pub fn configure_context(&mut self) -> ExecutionContext<'_> {
        ExecutionContext {
            robot: &mut self.robot,
            navigation: &mut self.navigation,
            inventory: &mut self.inventory,
        }
    }

    /// Run `instruction`. Failures are reported to the observers; on success the instruction is
    /// kept for undo and a finished run fires exactly one terminal notification.
    pub fn execute(&mut self, mut instruction: Instruction) -> ExecutionOutcome {
        let kind = instruction.kind();
        let result = instruction.execute(&mut self.configure_context());
        match result {
            Ok(()) => {
                tracing::debug!(instruction = %kind, "instruction executed");
                self.history.push(instruction);
                if self.is_over() {
                    self.announce_end();
                }
                ExecutionOutcome::Executed
            }
            Err(err) => {
                tracing::warn!(instruction = %kind, error = %err, "instruction failed");
                self.robot.request_error(&err.to_string());
                ExecutionOutcome::Failed
            }
        }
    }

    /// Revert the latest successful instruction. It is consumed whether or not the undo works.
    pub fn execute_undo(&mut self) -> ExecutionOutcome {
        let Some(mut instruction) = self.history.pop() else {
            let err = ExecutionError::NothingToUndo;
            tracing::warn!(error = %err, "undo failed");
            self.robot.request_error(&err.to_string());
            return ExecutionOutcome::Failed;
        };
        let kind = instruction.kind();
        match instruction.execute_undo(&mut self.configure_context()) {
            Ok(()) => {
                tracing::debug!(instruction = %kind, "instruction undone");
                ExecutionOutcome::Executed
            }
            Err(err) => {
                tracing::warn!(instruction = %kind, error = %err, "undo failed");
                self.robot.request_error(&err.to_string());
                ExecutionOutcome::Failed
            }
        }
    }

    fn announce_end(&self) {
        if self.navigation.at_spaceship() {
            tracing::info!("robot reached the spaceship");
            self.robot.observers.notify(|o| o.engine_shut_down(true));
        } else if self.robot.fuel <= 0 {
            tracing::info!("robot ran out of fuel");
            self.robot.observers.notify(|o| o.engine_shut_down(false));
        } else {
            tracing::info!("communication ended");
            self.robot.observers.notify(|o| o.communication_ended());
        }
    }

    pub fn is_over(&self) -> bool {
        self.robot.fuel <= 0 || self.navigation.at_spaceship() || self.robot.quit_requested
    }

    pub fn fuel(&self) -> i32 {
        self.robot.fuel
    }

    pub fn recycled_material(&self) -> i32 {
        self.robot.recycled_material
    }

    pub fn add_fuel(&mut self, delta: i32) {
        self.robot.add_fuel(delta);
    }

    pub fn add_recycled_material(&mut self, delta: i32) {
        self.robot.add_recycled_material(delta);
    }

    pub fn set_fuel(&mut self, fuel: i32) {
        self.robot.set_fuel(fuel);
    }

    pub fn set_recycled_material(&mut self, recycled_material: i32) {
        self.robot.set_recycled_material(recycled_material);
    }

    pub fn heading(&self) -> Direction {
        self.navigation.heading()
    }

    pub fn current_place(&self) -> &Place {
        self.navigation.current_place()
    }

    pub fn navigation(&self) -> &NavigationModule {
        &self.navigation
    }

    pub fn inventory(&self) -> &ItemContainer {
        &self.inventory
    }

    pub fn robot(&self) -> &RobotState {
        &self.robot
    }

    pub fn config(&self) -> &EngineConfig {
        &self.robot.config
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn say_something(&self, message: &str) {
        self.robot.say_something(message);
    }

    pub fn request_error(&self, message: &str) {
        self.robot.request_error(message);
    }

    pub fn request_help(&self) {
        self.robot.request_help();
    }

    pub fn request_quit(&mut self) {
        self.robot.request_quit();
    }
}
