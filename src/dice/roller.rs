use super::source::RandomSource;
use crate::error::RollerError;

/// A die with a fixed number of sides, rolled through whatever
/// [`RandomSource`] it was built with.
#[derive(Debug, Clone)]
pub struct DiceRoller<S> {
    sides: i64,
    source: S,
}

impl<S: RandomSource> DiceRoller<S> {
    #[tracing::instrument(skip(source))]
    pub fn new(sides: i64, source: S) -> Result<Self, RollerError> {
        if sides <= 0 {
            tracing::warn!(sides, "Rejected die without a positive side count");
            return Err(RollerError::InvalidArgument { sides });
        }
        Ok(Self { sides, source })
    }

    // Getters
    pub fn sides(&self) -> i64 {
        self.sides
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draws once from the source and maps the value onto `1..=sides`.
    pub fn roll(&self) -> i64 {
        let value = self.source.random();
        // rem_euclid keeps negative draws on the die as well
        let result = value.rem_euclid(self.sides) + 1;
        tracing::debug!(sides = self.sides, value, result, "Rolled die");
        result
    }

    pub fn roll_many(&self, count: usize) -> Vec<i64> {
        (0..count).map(|_| self.roll()).collect()
    }
}
