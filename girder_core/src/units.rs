//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## SI Units (Primary)
//!
//! Section geometry is entered and computed in SI units:
//! - Length: millimeters (mm)
//! - Area: mm², converted to m² for volume per length
//! - Section modulus: mm³
//! - Moment of inertia: mm⁴
//! - Unit weight: kilonewtons per cubic meter (kN/m³)
//! - Line load / self-weight: kilonewtons per meter (kN/m)
//!
//! Steel catalogue data arrives in US customary or centimeter-based units
//! (in, in², in⁴, lb/ft, cm², cm⁴, kg/m); the `From` conversions below bring
//! it into mm-based units.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::units::{SqMm, M3PerM, KnPerM3, KnPerM};
//!
//! let area = SqMm(100_000.0);
//! let volume: M3PerM = area.into();
//! assert_eq!(volume.0, 0.1);
//!
//! let weight: KnPerM = volume * KnPerM3(25.0);
//! assert!((weight.0 - 2.5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * 25.4)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqCm(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

impl From<SqIn> for SqMm {
    fn from(sqin: SqIn) -> Self {
        SqMm(sqin.0 * 645.16)
    }
}

impl From<SqCm> for SqMm {
    fn from(sqcm: SqCm) -> Self {
        SqMm(sqcm.0 * 100.0)
    }
}

impl From<SqMm> for SqM {
    fn from(sqmm: SqMm) -> Self {
        SqM(sqmm.0 / 1e6)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Section modulus in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

/// Section modulus in cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm3(pub f64);

/// Section modulus in inches³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct In3(pub f64);

/// Moment of inertia in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

/// Moment of inertia in cm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

/// Moment of inertia in inches⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct In4(pub f64);

impl From<In3> for Mm3 {
    fn from(in3: In3) -> Self {
        Mm3(in3.0 * 25.4_f64.powi(3))
    }
}

impl From<Cm3> for Mm3 {
    fn from(cm3: Cm3) -> Self {
        Mm3(cm3.0 * 1.0e3)
    }
}

impl From<In4> for Mm4 {
    fn from(in4: In4) -> Self {
        Mm4(in4.0 * 25.4_f64.powi(4))
    }
}

impl From<Cm4> for Mm4 {
    fn from(cm4: Cm4) -> Self {
        Mm4(cm4.0 * 1.0e4)
    }
}

// ============================================================================
// Volume, Unit Weight and Line Load
// ============================================================================

/// Volume per unit length in m³/m (numerically the cross-section area in m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M3PerM(pub f64);

/// Unit weight in kN/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM3(pub f64);

/// Line load in kN/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

/// Weight per linear foot in lb/ft
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerFt(pub f64);

/// Mass per linear meter in kg/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM(pub f64);

/// Standard gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Pound-force in newtons
const LBF_IN_N: f64 = 4.448_221_615_260_5;

/// Foot in meters
const FT_IN_M: f64 = 0.3048;

impl From<SqMm> for M3PerM {
    fn from(sqmm: SqMm) -> Self {
        M3PerM(SqM::from(sqmm).0)
    }
}

impl Mul<KnPerM3> for M3PerM {
    type Output = KnPerM;
    fn mul(self, rhs: KnPerM3) -> KnPerM {
        KnPerM(self.0 * rhs.0)
    }
}

impl From<LbPerFt> for KnPerM {
    fn from(lbft: LbPerFt) -> Self {
        KnPerM(lbft.0 * LBF_IN_N / FT_IN_M / 1000.0)
    }
}

impl From<KgPerM> for KnPerM {
    fn from(kgm: KgPerM) -> Self {
        KnPerM(kgm.0 * STANDARD_GRAVITY / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
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

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);
impl_arithmetic!(SqMm);
impl_arithmetic!(SqCm);
impl_arithmetic!(SqM);
impl_arithmetic!(SqIn);
impl_arithmetic!(Mm3);
impl_arithmetic!(Cm3);
impl_arithmetic!(In3);
impl_arithmetic!(Mm4);
impl_arithmetic!(Cm4);
impl_arithmetic!(In4);
impl_arithmetic!(M3PerM);
impl_arithmetic!(KnPerM3);
impl_arithmetic!(KnPerM);
impl_arithmetic!(LbPerFt);
impl_arithmetic!(KgPerM);
