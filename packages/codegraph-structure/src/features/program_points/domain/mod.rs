mod point_kind;
mod program_point;
mod variable;

pub use point_kind::ProgramPointKind;
pub use program_point::{compute_point_id, ProgramPoint, ProgramPointId};
pub use variable::VariableInfo;
