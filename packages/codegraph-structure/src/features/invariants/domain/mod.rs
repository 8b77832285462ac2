mod invariant;

pub use invariant::Invariant;
