use robocity_core::{FormatError, HelpText, Instruction, InstructionKind, Interpreter, Rotation};

fn parse(line: &str) -> Result<Instruction, FormatError> {
    Interpreter::new().generate_instruction(line)
}

#[test]
fn keywords_and_synonyms_ignore_case() {
    let cases = [
        ("move", Instruction::Move),
        ("MOVER", Instruction::Move),
        ("Turn Left", Instruction::Turn(Rotation::Left)),
        ("girar RIGHT", Instruction::Turn(Rotation::Right)),
        ("pick Battery", Instruction::Pick("Battery".to_owned())),
        ("COGER card", Instruction::Pick("card".to_owned())),
        ("drop card", Instruction::Drop("card".to_owned())),
        ("Soltar card", Instruction::Drop("card".to_owned())),
        ("operar battery", Instruction::operate("battery")),
        ("scan", Instruction::Scan(None)),
        ("ESCANEAR card", Instruction::Scan(Some("card".to_owned()))),
        ("radar", Instruction::Radar),
        ("ayuda", Instruction::Help),
        ("salir", Instruction::Quit),
    ];
    for (line, expected) in cases {
        assert_eq!(parse(line), Ok(expected), "line {line:?}");
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse("   move  "), Ok(Instruction::Move));
    assert_eq!(
        parse("\tpick   battery "),
        Ok(Instruction::Pick("battery".to_owned()))
    );
}

#[test]
fn malformed_lines_carry_the_full_help() {
    for line in ["", "fly", "move north", "turn", "turn around", "pick", "scan a b"] {
        let err = parse(line).expect_err(line);
        assert_eq!(err.help(), &HelpText::all());
    }
}

#[test]
fn format_error_is_one_line_with_structured_help() {
    let err = parse("  dance  ").expect_err("not a command");
    assert_eq!(err.to_string(), "Invalid instruction: dance");
    assert_eq!(err.help().header, HelpText::HEADER);
    for (line, kind) in err.help().lines.iter().zip(InstructionKind::PRIORITY) {
        assert_eq!(line, kind.help());
    }
}

#[test]
fn registry_order_decides_between_grammars() {
    let interpreter = Interpreter::new();
    assert_eq!(interpreter.registry(), &InstructionKind::PRIORITY);
    assert_eq!(interpreter.registry()[0], InstructionKind::Move);
    assert_eq!(interpreter.registry()[8], InstructionKind::Pick);
}

#[test]
fn instructions_report_their_help_line() {
    assert_eq!(Instruction::Move.help(), "MOVE | MOVER");
    assert_eq!(
        Instruction::Turn(Rotation::Left).help(),
        "TURN | GIRAR <LEFT|RIGHT>"
    );
    assert_eq!(Instruction::operate("x").help(), "OPERATE | OPERAR <ID>");
}
