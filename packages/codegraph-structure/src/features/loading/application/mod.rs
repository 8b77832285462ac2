//! Loading application layer (use cases)

mod load_program;

pub use load_program::ProgramLoader;
