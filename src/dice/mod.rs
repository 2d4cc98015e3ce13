pub mod roller;
pub mod source;


pub use roller::DiceRoller;
pub use source::{RandomSource, SeededSource, UniformTenSource};
