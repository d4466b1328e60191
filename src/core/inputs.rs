//! Coercion of raw host input into [`LaunchParameters`]. Unparseable or empty
//! fields fall back to their defaults instead of failing.

use crate::core::ballistics::LaunchParameters;
use crate::core::constants::EARTH_GRAVITY_MPS2;

pub const DEFAULT_HEIGHT_M: f64 = 0.0;
pub const DEFAULT_SPEED_MPS: f64 = 0.0;
pub const DEFAULT_ANGLE_DEG: f64 = 0.0;
pub const DEFAULT_GRAVITY_MPS2: f64 = EARTH_GRAVITY_MPS2;

#[derive(Clone, Debug, Default)]
pub struct RawInputs<'a> {
    pub height: &'a str,
    pub speed: &'a str,
    pub angle: &'a str,
    pub gravity: &'a str,
}

pub fn parse_or_default(value: &str, default: f64) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => {
            if !value.trim().is_empty() {
                log::warn!("could not parse '{value}' as a number, using {default}");
            }
            default
        }
    }
}

impl RawInputs<'_> {
    pub fn to_params(&self) -> LaunchParameters {
        LaunchParameters::new(
            parse_or_default(self.height, DEFAULT_HEIGHT_M),
            parse_or_default(self.speed, DEFAULT_SPEED_MPS),
            parse_or_default(self.angle, DEFAULT_ANGLE_DEG),
            parse_or_default(self.gravity, DEFAULT_GRAVITY_MPS2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_or_default(" 12.5 ", 0.0), 12.5);
        assert_eq!(parse_or_default("-3", 0.0), -3.0);
    }

    #[test]
    fn garbage_and_blank_fall_back_to_default() {
        assert_eq!(parse_or_default("abc", 9.81), 9.81);
        assert_eq!(parse_or_default("", 7.0), 7.0);
        assert_eq!(parse_or_default("NaN", 1.0), 1.0);
    }

    #[test]
    fn empty_form_yields_default_parameters() {
        assert_eq!(RawInputs::default().to_params(), LaunchParameters::default());
    }

    #[test]
    fn negative_speed_is_passed_through_for_the_solver() {
        let params = RawInputs {
            height: "1",
            speed: "-5",
            angle: "45",
            gravity: "oops",
        }
        .to_params();

        assert_eq!(params, LaunchParameters::new(1.0, -5.0, 45.0, EARTH_GRAVITY_MPS2));
    }
}
