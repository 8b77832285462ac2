//! Program point kinds

use std::fmt;

/// Kind of instrumentable location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramPointKind {
    MethodEntry,
    MethodExit,
    ConstructorEntry,
    ConstructorExit,
    LoopHeaderEntry,
    LoopHeaderExit,
    LoopBodyEntry,
    LoopBodyExit,
    StaticBlockEntry,
    StaticBlockExit,
    LambdaEntry,
    LambdaExit,
    /// Condition check only
    IfCondition,
    /// Field get
    FieldRead,
    /// Field set
    FieldWrite,
    Custom,
}

impl ProgramPointKind {
    pub const ALL: [ProgramPointKind; 16] = [
        ProgramPointKind::MethodEntry,
        ProgramPointKind::MethodExit,
        ProgramPointKind::ConstructorEntry,
        ProgramPointKind::ConstructorExit,
        ProgramPointKind::LoopHeaderEntry,
        ProgramPointKind::LoopHeaderExit,
        ProgramPointKind::LoopBodyEntry,
        ProgramPointKind::LoopBodyExit,
        ProgramPointKind::StaticBlockEntry,
        ProgramPointKind::StaticBlockExit,
        ProgramPointKind::LambdaEntry,
        ProgramPointKind::LambdaExit,
        ProgramPointKind::IfCondition,
        ProgramPointKind::FieldRead,
        ProgramPointKind::FieldWrite,
        ProgramPointKind::Custom,
    ];

    /// Name used inside unique IDs
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramPointKind::MethodEntry => "METHOD_ENTRY",
            ProgramPointKind::MethodExit => "METHOD_EXIT",
            ProgramPointKind::ConstructorEntry => "CONSTRUCTOR_ENTRY",
            ProgramPointKind::ConstructorExit => "CONSTRUCTOR_EXIT",
            ProgramPointKind::LoopHeaderEntry => "LOOP_HEADER_ENTRY",
            ProgramPointKind::LoopHeaderExit => "LOOP_HEADER_EXIT",
            ProgramPointKind::LoopBodyEntry => "LOOP_BODY_ENTRY",
            ProgramPointKind::LoopBodyExit => "LOOP_BODY_EXIT",
            ProgramPointKind::StaticBlockEntry => "STATIC_BLOCK_ENTRY",
            ProgramPointKind::StaticBlockExit => "STATIC_BLOCK_EXIT",
            ProgramPointKind::LambdaEntry => "LAMBDA_ENTRY",
            ProgramPointKind::LambdaExit => "LAMBDA_EXIT",
            ProgramPointKind::IfCondition => "IF_CONDITION",
            ProgramPointKind::FieldRead => "FIELD_READ",
            ProgramPointKind::FieldWrite => "FIELD_WRITE",
            ProgramPointKind::Custom => "CUSTOM",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(
            self,
            ProgramPointKind::MethodEntry
                | ProgramPointKind::ConstructorEntry
                | ProgramPointKind::LoopHeaderEntry
                | ProgramPointKind::LoopBodyEntry
                | ProgramPointKind::StaticBlockEntry
                | ProgramPointKind::LambdaEntry
        )
    }

    pub fn is_exit(&self) -> bool {
        matches!(
            self,
            ProgramPointKind::MethodExit
                | ProgramPointKind::ConstructorExit
                | ProgramPointKind::LoopHeaderExit
                | ProgramPointKind::LoopBodyExit
                | ProgramPointKind::StaticBlockExit
                | ProgramPointKind::LambdaExit
        )
    }
}

impl fmt::Display for ProgramPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
