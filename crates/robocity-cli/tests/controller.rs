use std::path::Path;

use robocity_cli::{ConsoleConfig, ConsoleController};
use robocity_core::{Direction, ExecutionOutcome, RobotEngine};
use robocity_loader::load_city_from_path;

fn madrid(config: &ConsoleConfig) -> ConsoleController<Vec<u8>> {
    let map = Path::new(env!("CARGO_MANIFEST_DIR")).join("maps/madrid.txt");
    let loaded = load_city_from_path(&map).expect("sample map loads");
    let engine = RobotEngine::with_config(
        loaded.city,
        loaded.initial_place,
        Direction::North,
        config.engine,
    );
    ConsoleController::new(engine, Vec::new(), config)
}

fn unix_config() -> ConsoleConfig {
    ConsoleConfig {
        line_separator: "\n".into(),
        ..ConsoleConfig::default()
    }
}

fn output(controller: &ConsoleController<Vec<u8>>) -> String {
    String::from_utf8(controller.console().borrow().output().clone()).expect("utf-8 output")
}

const WALKTHROUGH: &str = "\
turn left
turn left
move
pick card
turn left
move
turn left
operate card
move
turn right
move
";

#[test]
fn sample_map_can_be_finished() {
    let config = unix_config();
    let mut controller = madrid(&config);

    controller
        .run_game(WALKTHROUGH.as_bytes())
        .expect("in-memory output");

    assert!(controller.engine().is_over());
    assert!(controller.engine().current_place().is_spaceship());
    let out = output(&controller);
    assert!(out.starts_with("Entrada\nEstamos en la entrada. Comienza la aventura\n"));
    assert!(out.contains("WALL·E says: I am happy! Now I have card"));
    assert!(out.ends_with("WALL·E says: I am at my spaceship. Bye bye\n"));
    // 100 - 9 instructions * 5
    assert_eq!(controller.engine().fuel(), 55);
}

#[test]
fn end_of_input_ends_communication() {
    let config = unix_config();
    let mut controller = madrid(&config);

    controller.run_game("radar\n".as_bytes()).expect("in-memory output");

    assert!(controller.engine().is_over());
    assert!(output(&controller).ends_with("WALL·E says: I have communications problems. Bye bye\n"));
}

#[test]
fn undo_and_bad_lines_are_handled() {
    let config = ConsoleConfig {
        robot_name: "EVE".into(),
        ..unix_config()
    };
    let mut controller = madrid(&config);

    assert_eq!(controller.handle_line("undo"), ExecutionOutcome::Failed);
    assert_eq!(controller.handle_line("fly away"), ExecutionOutcome::Failed);
    assert_eq!(controller.handle_line("pick petrol"), ExecutionOutcome::Executed);
    assert_eq!(controller.handle_line("DESHACER"), ExecutionOutcome::Executed);
    assert!(controller.engine().inventory().is_empty());

    let out = output(&controller);
    assert!(out.contains("EVE says: No more instruction for Undo\n"));
    assert!(out.contains("EVE says: Invalid instruction: fly away\nThe valid instructions are:"));
    assert!(out.contains("EVE says: I am happy! Now I have petrol\n"));
}

#[test]
fn prompt_is_printed_before_each_line() {
    let config = unix_config();
    let mut controller = madrid(&config);

    controller.run_game("help\nquit\n".as_bytes()).expect("in-memory output");

    let out = output(&controller);
    assert_eq!(out.matches("WALL·E> ").count(), 2);
    assert!(out.contains("   UNDO | DESHACER\n"));
}

#[test]
fn rejected_lines_follow_the_configured_separator() {
    let config = ConsoleConfig {
        line_separator: "\r\n".into(),
        ..ConsoleConfig::default()
    };
    let mut controller = madrid(&config);

    assert_eq!(controller.handle_line("fly"), ExecutionOutcome::Failed);

    let out = output(&controller);
    assert!(out.starts_with(
        "WALL·E says: Invalid instruction: fly\r\nThe valid instructions are:\r\n   MOVE | MOVER\r\n"
    ));
    assert!(out.ends_with("   UNDO | DESHACER\r\n"));
    assert_eq!(out.matches('\n').count(), out.matches("\r\n").count());
}
