//! Physical Constants for Environmental Calculations
//!
//! All numeric values used by the formulas are defined here with their
//! purpose and source. They are fixed at build time and shared read-only
//! across all calls.

/// Adiabatic relationship M·g / (R·a) for the standard atmosphere.
///
/// Exponent relating the pressure ratio to altitude in the barometric
/// height formula. In typical environments this is 5.255.
///
/// Source: Barometrische Höhenformel, typical temperature gradients
pub const ADIABATIC_RELATIONSHIP: f64 = 5.255;

/// Euler's number, often referred to as `e`.
///
/// Kept at this precision so exponentials computed as `pow(e, x)`
/// reproduce the historical output of this library exactly.
pub const EULERS_NUMBER: f64 = 2.718281828;

/// Molar mass of water (g/mol).
///
/// Source: CODATA, from atomic weights of H and O
pub const MOLAR_MASS_H2O: f64 = 18.01534;

/// Temperature lapse rate (K/m).
///
/// The rate at which temperature decreases with increasing altitude.
/// As a mean over all weather scenarios this value is 0.0065 K/m.
///
/// Source: Barometrische Höhenformel, typical temperature gradients
pub const TEMPERATURE_LAPSE_RATE: f64 = 0.0065;

/// Universal gas constant, often referred to as `R` (J/mol/K).
///
/// Source: CODATA recommended values
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.31447215;

/// Standard atmospheric pressure at sea level (mbar).
///
/// Convenient reference pressure for altitude calculations when no
/// measured mean-sea-level pressure is available. Actual pressure
/// varies with weather patterns.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_MBAR: f64 = 1013.25;
