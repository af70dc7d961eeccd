//! Enumeration of 3-axis stacking factorizations.

use palletize_core::{Error, Result, StackingFactor};

/// How the ordered factor triples are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumerationStrategy {
    /// Walks divisors of `n`, then divisors of `n / x`.
    #[default]
    Divisors,
    /// Scans every triple in `[1, n]³` and keeps those whose product is `n`.
    /// Cubic in `n`; intended for cross-checking small counts.
    Exhaustive,
}

/// Produces every ordered `(x, y, z)` with `x * y * z == n`.
///
/// Both strategies yield the same sequence, sorted lexicographically by
/// `(x, y, z)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorEnumerator {
    strategy: EnumerationStrategy,
}

impl FactorEnumerator {
    /// Creates an enumerator using the given strategy.
    pub fn new(strategy: EnumerationStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the strategy in use.
    pub fn strategy(&self) -> EnumerationStrategy {
        self.strategy
    }

    /// Enumerates the stacking factors of `n`.
    ///
    /// Fails with [`Error::InvalidCount`] when `n < 1` or `n` does not fit in
    /// a factor component.
    pub fn enumerate(&self, n: i64) -> Result<Vec<StackingFactor>> {
        let n = validate_count(n)?;

        let factors = match self.strategy {
            EnumerationStrategy::Divisors => by_divisors(n),
            EnumerationStrategy::Exhaustive => by_scan(n),
        };

        Ok(factors)
    }

    /// Enumerates the stacking factors of a count supplied as a float, as it
    /// arrives from form fields and JSON documents.
    pub fn enumerate_value(&self, n: f64) -> Result<Vec<StackingFactor>> {
        self.enumerate(integral_count(n)?)
    }
}

/// Enumerates the stacking factors of `n` with the default strategy.
pub fn enumerate_factors(n: i64) -> Result<Vec<StackingFactor>> {
    FactorEnumerator::default().enumerate(n)
}

/// Number of ordered triples with product `n`, counted without building them.
pub fn factor_count(n: u32) -> usize {
    divisors(n)
        .into_iter()
        .map(|x| divisors(n / x).len())
        .sum()
}

fn validate_count(n: i64) -> Result<u32> {
    if n < 1 {
        return Err(Error::InvalidCount(format!(
            "count must be at least 1, got {}",
            n
        )));
    }

    u32::try_from(n)
        .map_err(|_| Error::InvalidCount(format!("count {} exceeds {}", n, u32::MAX)))
}

fn integral_count(n: f64) -> Result<i64> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(Error::InvalidCount(format!(
            "count must be a whole number, got {}",
            n
        )));
    }

    if n < i64::MIN as f64 || n > i64::MAX as f64 {
        return Err(Error::InvalidCount(format!("count {} is out of range", n)));
    }

    Ok(n as i64)
}

/// Divisors of `n` in ascending order, found in pairs up to `sqrt(n)`.
fn divisors(n: u32) -> Vec<u32> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d: u32 = 1;
    while u64::from(d) * u64::from(d) <= u64::from(n) {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

fn by_divisors(n: u32) -> Vec<StackingFactor> {
    let mut factors = Vec::new();
    for x in divisors(n) {
        let rest = n / x;
        for y in divisors(rest) {
            factors.push(StackingFactor::new(x, y, rest / y));
        }
    }
    factors
}

fn by_scan(n: u32) -> Vec<StackingFactor> {
    let target = u64::from(n);
    let mut factors = Vec::new();
    for x in 1..=n {
        for y in 1..=n {
            for z in 1..=n {
                let factor = StackingFactor::new(x, y, z);
                if factor.product() == target {
                    factors.push(factor);
                }
            }
        }
    }
    factors
}
