//! Unit Tags for Environmental Quantities
//!
//! Every formula in this crate takes its numeric inputs together with an
//! explicit unit tag - there is no implicit or global unit default. The
//! tags are closed enums, so an out-of-range discriminator cannot be
//! constructed; each conversion site matches exhaustively and the
//! compiler rejects a missing arm at build time.
//!
//! Canonical units (what the formulas compute in internally) are degrees
//! Celsius, millibars, and meters. Inputs in other units are converted on
//! entry via [`crate::convert`]; results are converted back on exit where
//! the signature calls for it.

/// Unit tag for altitude values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AltitudeUnit {
    /// Meters above the reference datum.
    Meters,
    /// Feet above the reference datum.
    Feet,
}

/// Unit tag for pressure values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressureUnit {
    /// Millibars, equivalent to hectopascals.
    Mbar,
    /// Millimeters of mercury (torr).
    Mmhg,
}

/// Unit tag for temperature values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}
