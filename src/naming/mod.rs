pub mod types;

#[cfg(test)]
mod tests;

pub use types::{same_full_name, FullyNamed, Person, Starship};
