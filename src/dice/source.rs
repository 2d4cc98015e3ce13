use std::cell::RefCell;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A producer of random integers within a fixed, inclusive range.
///
/// Implementations only promise that `random()` lands inside `range()`.
/// Uniformity, seeding and determinism are up to the implementation.
pub trait RandomSource {
    fn random(&self) -> i64;

    fn range(&self) -> RangeInclusive<i64>;
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    fn random(&self) -> i64 {
        (**self).random()
    }

    fn range(&self) -> RangeInclusive<i64> {
        (**self).range()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn random(&self) -> i64 {
        (**self).random()
    }

    fn range(&self) -> RangeInclusive<i64> {
        (**self).range()
    }
}

const ONE_THROUGH_TEN: RangeInclusive<i64> = 1..=10;

/// Draws from 1 through 10 using the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformTenSource;

impl UniformTenSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for UniformTenSource {
    fn random(&self) -> i64 {
        rand::rng().random_range(ONE_THROUGH_TEN)
    }

    fn range(&self) -> RangeInclusive<i64> {
        ONE_THROUGH_TEN
    }
}

/// Draws from 1 through 10 with a seeded generator, so a given seed always
/// yields the same sequence.
#[derive(Debug)]
pub struct SeededSource {
    rng: RefCell<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn random(&self) -> i64 {
        self.rng.borrow_mut().random_range(ONE_THROUGH_TEN)
    }

    fn range(&self) -> RangeInclusive<i64> {
        ONE_THROUGH_TEN
    }
}
