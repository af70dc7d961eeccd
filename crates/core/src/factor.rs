//! Stacking factors.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many identical items are laid out along each axis of a container.
///
/// `(x, y, z)` maps onto (length, width, height). For a container holding `n`
/// items, a valid factor satisfies `x * y * z == n` with every component at
/// least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u32; 3]", into = "[u32; 3]"))]
pub struct StackingFactor {
    /// Items along the length axis.
    pub x: u32,
    /// Items along the width axis.
    pub y: u32,
    /// Items along the height axis.
    pub z: u32,
}

impl StackingFactor {
    /// The single-item stacking `(1, 1, 1)`.
    pub const SINGLE: Self = Self::new(1, 1, 1);

    /// Creates a stacking factor.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Number of items in the stack.
    pub fn product(&self) -> u64 {
        u64::from(self.x) * u64::from(self.y) * u64::from(self.z)
    }

    /// Returns true if this factor arranges exactly `count` items.
    pub fn is_factorization_of(&self, count: u64) -> bool {
        self.x >= 1 && self.y >= 1 && self.z >= 1 && self.product() == count
    }

    /// Returns the factor as a floating-point vector for dimension arithmetic.
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Returns `[x, y, z]`.
    pub fn to_array(&self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for StackingFactor {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl From<[u32; 3]> for StackingFactor {
    fn from(v: [u32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(u32, u32, u32)> for StackingFactor {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<StackingFactor> for [u32; 3] {
    fn from(f: StackingFactor) -> Self {
        f.to_array()
    }
}

impl std::fmt::Display for StackingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product() {
        assert_eq!(StackingFactor::new(2, 3, 4).product(), 24);
        assert_eq!(StackingFactor::SINGLE.product(), 1);
        assert_eq!(
            StackingFactor::new(u32::MAX, 2, 1).product(),
            u64::from(u32::MAX) * 2
        );
    }

    #[test]
    fn test_is_factorization_of() {
        assert!(StackingFactor::new(2, 2, 1).is_factorization_of(4));
        assert!(StackingFactor::new(1, 4, 1).is_factorization_of(4));
        assert!(!StackingFactor::new(1, 1, 3).is_factorization_of(4));
        assert!(!StackingFactor::new(0, 2, 2).is_factorization_of(0));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut factors = vec![
            StackingFactor::new(2, 1, 1),
            StackingFactor::new(1, 2, 1),
            StackingFactor::new(1, 1, 2),
        ];
        factors.sort();
        assert_eq!(
            factors,
            vec![
                StackingFactor::new(1, 1, 2),
                StackingFactor::new(1, 2, 1),
                StackingFactor::new(2, 1, 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(StackingFactor::new(2, 2, 1).to_string(), "2 x 2 x 1");
    }
}
