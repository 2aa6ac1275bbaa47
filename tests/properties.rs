//! Property tests for the conversion and formula layers.

use envcalc::{
    altitude, convert, dew_point, equivalent_sea_level_pressure, AltitudeUnit, PressureUnit,
    TemperatureUnit,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn feet_meters_round_trip(x in -10_000.0f64..10_000.0) {
        let there_and_back = convert::meters_to_feet(convert::feet_to_meters(x));
        prop_assert!((there_and_back - x).abs() < 1e-6);
    }

    #[test]
    fn kelvin_offset_is_exact(t in -200i32..200) {
        let t = f64::from(t);
        prop_assert_eq!(convert::celsius_to_kelvin(t) - t, 273.15);
    }

    #[test]
    fn altitude_zero_at_reference(
        reference in 900.0f64..1050.0,
        t in -20.0f64..40.0,
    ) {
        let h = altitude(
            reference,
            reference,
            PressureUnit::Mbar,
            t,
            TemperatureUnit::Celsius,
            AltitudeUnit::Meters,
        );
        prop_assert_eq!(h, 0.0);
    }

    #[test]
    fn altitude_strictly_decreasing_in_pressure(
        reference in 950.0f64..1050.0,
        lower in 500.0f64..940.0,
        delta in 1.0f64..100.0,
        t in -20.0f64..40.0,
    ) {
        let higher = lower + delta;
        let h_low_pressure = altitude(
            lower, reference, PressureUnit::Mbar,
            t, TemperatureUnit::Celsius, AltitudeUnit::Meters,
        );
        let h_high_pressure = altitude(
            higher, reference, PressureUnit::Mbar,
            t, TemperatureUnit::Celsius, AltitudeUnit::Meters,
        );
        prop_assert!(h_low_pressure > h_high_pressure);
    }

    #[test]
    fn sea_level_pressure_inverts_altitude(
        station_altitude in 0.0f64..3000.0,
        t in -20.0f64..40.0,
        station_pressure in 900.0f64..1050.0,
    ) {
        let slp = equivalent_sea_level_pressure(
            station_altitude,
            AltitudeUnit::Meters,
            t,
            TemperatureUnit::Celsius,
            station_pressure,
        );
        let recovered = altitude(
            station_pressure,
            slp,
            PressureUnit::Mbar,
            t,
            TemperatureUnit::Celsius,
            AltitudeUnit::Meters,
        );
        prop_assert!((recovered - station_altitude).abs() < 1e-6);
    }

    #[test]
    fn altitude_unit_tags_are_equivalent_to_manual_conversion(
        pressure_mmhg in 400.0f64..800.0,
        reference in 950.0f64..1050.0,
        t_fahrenheit in 0.0f64..110.0,
    ) {
        let tagged = altitude(
            pressure_mmhg,
            reference,
            PressureUnit::Mmhg,
            t_fahrenheit,
            TemperatureUnit::Fahrenheit,
            AltitudeUnit::Meters,
        );
        let manual = altitude(
            convert::mmhg_to_mbar(pressure_mmhg),
            reference,
            PressureUnit::Mbar,
            convert::fahrenheit_to_celsius(t_fahrenheit),
            TemperatureUnit::Celsius,
            AltitudeUnit::Meters,
        );
        let tolerance = f64::EPSILON * tagged.abs().max(1.0);
        prop_assert!((tagged - manual).abs() <= tolerance);
    }

    #[test]
    fn dew_point_never_exceeds_temperature(
        t in -30.0f64..50.0,
        rh in 1.0f64..100.0,
    ) {
        let td = dew_point(t, TemperatureUnit::Celsius, rh);
        prop_assert!(td <= t + 1e-6);
    }

    #[test]
    fn dew_point_at_saturation_equals_temperature(t in -30.0f64..50.0) {
        let td = dew_point(t, TemperatureUnit::Celsius, 100.0);
        prop_assert!((td - t).abs() < 1e-6);
    }
}
