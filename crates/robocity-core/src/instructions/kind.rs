use core::fmt;

use super::Instruction;
use crate::Rotation;

/// Tag of each instruction, carrying its grammar and help line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Move,
    Drop,
    Help,
    Quit,
    Scan,
    Radar,
    Turn,
    Operate,
    Pick,
}

impl InstructionKind {
    /// Order in which the interpreter tries each grammar.
    pub const PRIORITY: [InstructionKind; 9] = [
        InstructionKind::Move,
        InstructionKind::Drop,
        InstructionKind::Help,
        InstructionKind::Quit,
        InstructionKind::Scan,
        InstructionKind::Radar,
        InstructionKind::Turn,
        InstructionKind::Operate,
        InstructionKind::Pick,
    ];

    /// Command words, ignoring case.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            InstructionKind::Move => &["MOVE", "MOVER"],
            InstructionKind::Drop => &["DROP", "SOLTAR"],
            InstructionKind::Help => &["HELP", "AYUDA"],
            InstructionKind::Quit => &["QUIT", "SALIR"],
            InstructionKind::Scan => &["SCAN", "ESCANEAR"],
            InstructionKind::Radar => &["RADAR"],
            InstructionKind::Turn => &["TURN", "GIRAR"],
            InstructionKind::Operate => &["OPERATE", "OPERAR"],
            InstructionKind::Pick => &["PICK", "COGER"],
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            InstructionKind::Move => "MOVE | MOVER",
            InstructionKind::Drop => "DROP | SOLTAR <id>",
            InstructionKind::Help => "HELP | AYUDA",
            InstructionKind::Quit => "QUIT | SALIR",
            InstructionKind::Scan => "SCAN | ESCANEAR [id]",
            InstructionKind::Radar => "RADAR",
            InstructionKind::Turn => "TURN | GIRAR <LEFT|RIGHT>",
            InstructionKind::Operate => "OPERATE | OPERAR <ID>",
            InstructionKind::Pick => "PICK | COGER <id>",
        }
    }

    /// Try this grammar on `line`. `None` means the line is not this instruction.
    pub fn parse(self, line: &str) -> Option<Instruction> {
        let mut words = line.split_whitespace();
        let keyword = words.next()?;
        if !self
            .keywords()
            .iter()
            .any(|k| k.eq_ignore_ascii_case(keyword))
        {
            return None;
        }
        let args: Vec<&str> = words.collect();
        match (self, args.as_slice()) {
            (InstructionKind::Move, []) => Some(Instruction::Move),
            (InstructionKind::Help, []) => Some(Instruction::Help),
            (InstructionKind::Quit, []) => Some(Instruction::Quit),
            (InstructionKind::Radar, []) => Some(Instruction::Radar),
            (InstructionKind::Scan, []) => Some(Instruction::Scan(None)),
            (InstructionKind::Scan, [id]) => Some(Instruction::Scan(Some((*id).to_owned()))),
            (InstructionKind::Drop, [id]) => Some(Instruction::Drop((*id).to_owned())),
            (InstructionKind::Pick, [id]) => Some(Instruction::Pick((*id).to_owned())),
            (InstructionKind::Operate, [id]) => Some(Instruction::operate(*id)),
            (InstructionKind::Turn, [word]) => match Rotation::parse(word) {
                Rotation::Unknown => None,
                rotation => Some(Instruction::Turn(rotation)),
            },
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.keywords()[0]
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
