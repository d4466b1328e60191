use std::fmt;

use crate::core::ballistics::FlightSolution;
use crate::core::constants::PLACEHOLDER;

/// The three readouts shown next to the drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayValues {
    pub apex_height: String,
    pub horizontal_range: String,
    pub time_of_flight: String,
}

/// Two decimals, with values that round to zero shown unsigned.
fn two_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

impl DisplayValues {
    pub fn placeholder() -> Self {
        Self {
            apex_height: PLACEHOLDER.to_string(),
            horizontal_range: PLACEHOLDER.to_string(),
            time_of_flight: PLACEHOLDER.to_string(),
        }
    }

    pub fn from_solution(solution: &FlightSolution) -> Self {
        if !solution.is_valid() {
            return Self::placeholder();
        }
        Self {
            apex_height: two_decimals(solution.apex_height_m),
            horizontal_range: two_decimals(solution.horizontal_range_m),
            time_of_flight: two_decimals(solution.time_of_flight_s),
        }
    }
}

impl fmt::Display for DisplayValues {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Max height: {} m | Range: {} m | Flight time: {} s",
            self.apex_height, self.horizontal_range, self.time_of_flight
        )
    }
}
