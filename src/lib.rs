//! Environmental calculations for barometric/humidity sensor readings
//!
//! Computes derived quantities - altitude, absolute humidity, equivalent
//! sea-level pressure, dew point - from raw temperature, pressure, and
//! humidity values as reported by BME280-class sensors.
//!
//! The library is a stateless set of closed-form formulas: scalar inputs
//! with explicit unit tags in, scalar result out. No I/O, no allocation,
//! no shared state. Every function is safe to call concurrently.
//!
//! Key constraints:
//! - `no_std` compatible (math via `libm`)
//! - No heap allocation anywhere
//! - No panics in library code; out-of-domain inputs propagate as
//!   IEEE-754 special values (NaN, ±infinity)
//!
//! ```
//! use envcalc::{dew_point, TemperatureUnit};
//!
//! // 25°C at 60% relative humidity condenses just under 17°C
//! let td = dew_point(25.0, TemperatureUnit::Celsius, 60.0);
//! assert!(td > 16.0 && td < 17.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod convert;
pub mod formulas;
pub mod units;

// Public API
pub use formulas::{absolute_humidity, altitude, dew_point, equivalent_sea_level_pressure};
pub use units::{AltitudeUnit, PressureUnit, TemperatureUnit};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
