//! Text renderer registered as every observer of the engine.

use std::io::{self, Write};

use robocity_core::{
    Direction, HelpText, InventoryObserver, Item, NavigationObserver, PlaceView,
    RobotEngineObserver,
};

use crate::config::ConsoleConfig;
use crate::controller::UNDO_HELP;

pub struct Console<W: Write> {
    out: W,
    name: String,
    indent: String,
    separator: String,
    error: Option<io::Error>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: &ConsoleConfig) -> Self {
        Self {
            out,
            name: config.robot_name.clone(),
            indent: config.item_indent.clone(),
            separator: config.line_separator.clone(),
            error: None,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// First write failure since the last call. Observer callbacks cannot fail, so the error is
    /// parked here for the controller.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn prompt(&mut self, prompt: &str) {
        let result = write!(self.out, "{prompt}").and_then(|()| self.out.flush());
        self.record(result);
    }

    fn line(&mut self, text: &str) {
        let result = write!(self.out, "{text}{}", self.separator);
        self.record(result);
    }

    /// Grammar listing, followed by the controller's own `UNDO` line.
    pub fn help(&mut self, help: &HelpText) {
        self.line(&help.header);
        self.listing(help.lines.iter().map(String::as_str));
        let undo = format!("{}{UNDO_HELP}", self.indent);
        self.line(&undo);
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "console write failed");
            self.error.get_or_insert(err);
        }
    }

    fn says(&mut self, message: &str) {
        let text = format!("{} says: {message}", self.name);
        self.line(&text);
    }

    fn listing<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            let text = format!("{}{id}", self.indent);
            self.line(&text);
        }
    }

    fn place(&mut self, place: &PlaceView) {
        self.line(&place.name);
        self.line(&place.description);
        if place.is_empty() {
            self.line("The place is empty. There are no objects to pick");
        } else {
            self.line("The place contains these objects:");
            self.listing(place.items.iter().map(String::as_str));
        }
    }

    fn looking_at(&mut self, heading: Direction) {
        let text = format!("{} is looking at direction {heading}", self.name);
        self.line(&text);
    }
}

impl<W: Write> NavigationObserver for Console<W> {
    fn heading_changed(&mut self, new_heading: Direction) {
        self.looking_at(new_heading);
    }

    fn navigation_initialized(&mut self, initial_place: &PlaceView, heading: Direction) {
        self.place(initial_place);
        self.looking_at(heading);
    }

    fn place_changed(&mut self, place: &PlaceView) {
        self.line("Place has changed");
        self.place(place);
    }

    fn place_scanned(&mut self, place: &PlaceView) {
        self.place(place);
    }

    fn robot_arrived_at_place(&mut self, heading: Direction, place: &PlaceView) {
        self.says(&format!("Moving in direction {heading}"));
        self.place(place);
    }
}

impl<W: Write> RobotEngineObserver for Console<W> {
    fn help_requested(&mut self, help: &HelpText) {
        self.help(help);
    }

    fn engine_shut_down(&mut self, at_spaceship: bool) {
        if at_spaceship {
            self.says("I am at my spaceship. Bye bye");
        } else {
            self.says("I run out of fuel. I cannot move. Shutting down...");
        }
    }

    fn communication_ended(&mut self) {
        self.says("I have communications problems. Bye bye");
    }

    fn robot_speaks(&mut self, message: &str) {
        self.says(message);
    }

    fn error_raised(&mut self, message: &str) {
        self.says(message);
    }

    fn state_updated(&mut self, fuel: i32, recycled_material: i32) {
        self.line(&format!("      * My power is {fuel}"));
        self.line(&format!("      * My recycled material is {recycled_material}"));
    }
}

impl<W: Write> InventoryObserver for Console<W> {
    fn inventory_changed(&mut self, inventory: &[&Item]) {
        if inventory.is_empty() {
            self.line("The inventory is empty");
        } else {
            self.says("I am carrying the following items");
            self.listing(inventory.iter().map(|item| item.id()));
        }
    }
}
