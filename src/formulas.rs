//! Environmental Formulas
//!
//! The primary public surface of this crate: four independent functions
//! deriving altitude, absolute humidity, equivalent sea-level pressure,
//! and dew point from raw sensor readings.
//!
//! Each function normalizes its inputs to the canonical units (°C, mbar,
//! meters) via [`crate::convert`], applies a closed-form physical
//! formula, and converts the result back to the caller's requested unit
//! where the signature calls for it.
//!
//! ## Numeric domain
//!
//! Inputs are not validated. A zero or negative pressure in [`altitude`]
//! or a non-positive relative humidity in [`dew_point`] is outside the
//! formula's domain and yields an IEEE-754 special value (NaN or
//! ±infinity) from the underlying power/logarithm, never a panic.
//! Callers must treat such outputs as undefined results.
//!
//! ## Why `libm`?
//!
//! `pow` and `log` go through `libm` rather than the `f64` intrinsics so
//! the crate builds on `no_std` targets without a hardware FPU.

use crate::{
    constants::{
        ADIABATIC_RELATIONSHIP, EULERS_NUMBER, MOLAR_MASS_H2O, TEMPERATURE_LAPSE_RATE,
        UNIVERSAL_GAS_CONSTANT,
    },
    convert,
    units::{AltitudeUnit, PressureUnit, TemperatureUnit},
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Normalize a tagged temperature to °C.
fn to_celsius(temperature: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => temperature,
        TemperatureUnit::Fahrenheit => convert::fahrenheit_to_celsius(temperature),
    }
}

/// Calculate the local altitude from station pressure and temperature.
///
/// Inverts the barometric height formula for the troposphere:
///
/// ```text
/// h = ((P₀/P)^(1/5.255) - 1) · T_K / L
/// ```
///
/// where `P₀` is the mean-sea-level reference pressure, `T_K` the station
/// temperature in Kelvin and `L` the temperature lapse rate.
///
/// `reference_pressure` is always taken in millibars; `pressure_unit`
/// applies to `pressure` only. The result is in `altitude_unit`.
///
/// At `pressure == reference_pressure` the altitude is exactly `0.0`.
/// A zero or negative pressure yields ±infinity or NaN.
pub fn altitude(
    pressure: f64,
    reference_pressure: f64,
    pressure_unit: PressureUnit,
    temperature: f64,
    temperature_unit: TemperatureUnit,
    altitude_unit: AltitudeUnit,
) -> f64 {
    let temperature = to_celsius(temperature, temperature_unit);
    let pressure = match pressure_unit {
        PressureUnit::Mbar => pressure,
        PressureUnit::Mmhg => convert::mmhg_to_mbar(pressure),
    };
    if pressure <= 0.0 || reference_pressure <= 0.0 {
        log_warn!(
            "altitude: non-positive pressure (P: {}, P0: {}), result is undefined",
            pressure,
            reference_pressure
        );
    }
    let local_altitude = (libm::pow(reference_pressure / pressure, 1.0 / ADIABATIC_RELATIONSHIP)
        - 1.0)
        * (convert::celsius_to_kelvin(temperature) / TEMPERATURE_LAPSE_RATE);
    match altitude_unit {
        AltitudeUnit::Meters => local_altitude,
        AltitudeUnit::Feet => convert::meters_to_feet(local_altitude),
    }
}

/// Calculate the absolute humidity in g/m³.
///
/// Precision is about 0.1°C in the range -30 to 35°C. Saturation vapor
/// pressure coefficients after Buck (1981):
///
/// ```text
/// August-Roche-Magnus   6.1094 · exp(17.625 T / (T + 243.04))
/// Buck (1981)           6.1121 · exp(17.502 T / (T + 240.97))
/// ```
///
/// Known quirk: the exponent and denominator here fold in the gas
/// constant differently than the Buck derivation above, and
/// `_relative_humidity` does not enter the computation at all - the
/// result is the saturation value regardless of the reported humidity.
/// The behavior is kept bit-for-bit for compatibility with existing
/// callers; the parameter stays in the signature for API stability.
pub fn absolute_humidity(
    temperature: f64,
    temperature_unit: TemperatureUnit,
    _relative_humidity: f64,
) -> f64 {
    let temperature = to_celsius(temperature, temperature_unit);
    let kelvin = convert::celsius_to_kelvin(temperature);
    let saturation = libm::pow(
        EULERS_NUMBER,
        (17.502 * temperature) / kelvin * UNIVERSAL_GAS_CONSTANT,
    );
    6.1121 * saturation * MOLAR_MASS_H2O / (kelvin * UNIVERSAL_GAS_CONSTANT)
}

/// Calculate the pressure an equivalent station at mean sea level would
/// measure, given the local pressure, altitude, and temperature.
///
/// Inverse of [`altitude`]: feeding the result back as the reference
/// pressure recovers the original altitude (up to float rounding).
/// `pressure` is taken in millibars; the result is in millibars.
pub fn equivalent_sea_level_pressure(
    altitude: f64,
    altitude_unit: AltitudeUnit,
    temperature: f64,
    temperature_unit: TemperatureUnit,
    pressure: f64,
) -> f64 {
    let temperature = to_celsius(temperature, temperature_unit);
    let altitude = match altitude_unit {
        AltitudeUnit::Meters => altitude,
        AltitudeUnit::Feet => convert::feet_to_meters(altitude),
    };
    let temperature_lapse = TEMPERATURE_LAPSE_RATE * altitude;
    pressure
        / libm::pow(
            1.0 - temperature_lapse / (convert::celsius_to_kelvin(temperature) + temperature_lapse),
            ADIABATIC_RELATIONSHIP,
        )
}

/// Calculate the dew point, the temperature at which the air becomes
/// saturated at the current moisture content.
///
/// Magnus formula with the Alduchov-Eskridge coefficients (17.625,
/// 243.04 °C). `relative_humidity` is a percentage in (0, 100]; the
/// result is in the same unit as the input temperature.
///
/// A non-positive relative humidity is outside the logarithm's domain
/// and yields NaN.
pub fn dew_point(temperature: f64, temperature_unit: TemperatureUnit, relative_humidity: f64) -> f64 {
    let celsius = to_celsius(temperature, temperature_unit);
    if relative_humidity <= 0.0 {
        log_warn!(
            "dew_point: non-positive relative humidity ({}), result is undefined",
            relative_humidity
        );
    }
    let ln_rh = libm::log(relative_humidity / 100.0);
    let magnus_term = (17.625 * celsius) / (243.04 + celsius);
    let dew_point = 243.04 * (ln_rh + magnus_term) / (17.625 - ln_rh - magnus_term);
    match temperature_unit {
        TemperatureUnit::Celsius => dew_point,
        TemperatureUnit::Fahrenheit => convert::celsius_to_fahrenheit(dew_point),
    }
}
