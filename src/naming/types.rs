use std::fmt;

/// Anything that can report a full, human readable name.
pub trait FullyNamed {
    fn full_name(&self) -> String;
}

/// Compares two named values by their computed full names, regardless of
/// their concrete types.
pub fn same_full_name(a: &impl FullyNamed, b: &impl FullyNamed) -> bool {
    a.full_name() == b.full_name()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    full_name: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

impl FullyNamed for Person {
    fn full_name(&self) -> String {
        self.full_name.clone()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// A ship whose full name is derived from its name and optional prefix
/// on every read.
#[derive(Debug, Clone)]
pub struct Starship {
    name: String,
    prefix: Option<String>,
}

impl Starship {
    pub fn new(name: impl Into<String>, prefix: Option<&str>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.map(str::to_owned),
        }
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl FullyNamed for Starship {
    fn full_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{} {}", prefix, self.name),
            None => self.name.clone(),
        }
    }
}

// Two ships are the same ship when they go by the same full name.
impl PartialEq for Starship {
    fn eq(&self, other: &Self) -> bool {
        same_full_name(self, other)
    }
}

impl Eq for Starship {}

impl fmt::Display for Starship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
