//! # Unit Types
//!
//! Type-safe wrappers for the fixed metric units used by the bearing capacity
//! calculation. Plain `f64` newtypes with transparent serialization, so JSON
//! stays as bare numbers.
//!
//! - Length: metres (m)
//! - Unit weight: kilonewtons per cubic metre (kN/m³)
//! - Stress / pressure: kilonewtons per square metre (kN/m²)
//!
//! The only cross-unit product the pipeline needs is unit weight times depth,
//! which yields a stress.
//!
//! ## Example
//!
//! ```rust
//! use sbc_core::units::{KnPerM3, Meters};
//!
//! let stress = KnPerM3(18.0) * Meters(2.0);
//! assert_eq!(stress.0, 36.0);
//! assert_eq!(format!("{:.2}", stress), "36.00 kN/m²");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Unit weight in kN/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM3(pub f64);

/// Stress or pressure in kN/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM2(pub f64);

impl Mul<Meters> for KnPerM3 {
    type Output = KnPerM2;
    fn mul(self, rhs: Meters) -> KnPerM2 {
        KnPerM2(self.0 * rhs.0)
    }
}

macro_rules! impl_unit {
    ($type:ty, $symbol:expr) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl $type {
            /// Unit symbol used in reports
            pub const SYMBOL: &'static str = $symbol;

            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }

        // Honours the caller's precision, e.g. `{:.2}`
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, $symbol),
                    None => write!(f, "{} {}", self.0, $symbol),
                }
            }
        }
    };
}

impl_unit!(Meters, "m");
impl_unit!(KnPerM3, "kN/m³");
impl_unit!(KnPerM2, "kN/m²");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_weight_times_depth() {
        let stress = KnPerM3(8.0) * Meters(1.5);
        assert_eq!(stress, KnPerM2(12.0));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!((Meters(3.0) - Meters(2.0)).value(), 1.0);
        assert_eq!((KnPerM2(36.0) + KnPerM2(8.0)).value(), 44.0);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", KnPerM2(268.4)), "268.40 kN/m²");
        assert_eq!(format!("{}", Meters(2.5)), "2.5 m");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&KnPerM3(18.5)).unwrap();
        assert_eq!(json, "18.5");
    }
}
