use std::error::Error;
use std::fmt;

use crate::core::constants::EARTH_GRAVITY_MPS2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub height_m: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    pub fn new(height_m: f64, speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> Self {
        Self {
            height_m,
            speed_mps,
            angle_deg,
            gravity_mps2,
        }
    }
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, EARTH_GRAVITY_MPS2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightError {
    /// Negative speed, non-positive gravity, or a non-finite input.
    InvalidInput,
    /// The landing equation has no non-negative real root.
    NoRealSolution,
}

impl fmt::Display for FlightError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlightError::InvalidInput => write!(
                f,
                "invalid input: speed must be >= 0, gravity > 0, and all values finite"
            ),
            FlightError::NoRealSolution => write!(f, "no real landing time for these inputs"),
        }
    }
}

impl Error for FlightError {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSolution {
    pub time_of_flight_s: f64,
    pub horizontal_range_m: f64,
    pub apex_height_m: f64,
    pub horizontal_velocity_mps: f64,
    pub vertical_velocity_mps: f64,
    pub failure: Option<FlightError>,
}

impl FlightSolution {
    fn invalid(failure: FlightError) -> Self {
        Self {
            time_of_flight_s: 0.0,
            horizontal_range_m: 0.0,
            apex_height_m: 0.0,
            horizontal_velocity_mps: 0.0,
            vertical_velocity_mps: 0.0,
            failure: Some(failure),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at(params: LaunchParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = params.height_m + (vy * time_s) - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

fn flight_time(params: LaunchParameters, vy: f64) -> Result<f64, FlightError> {
    let g = params.gravity_mps2;
    let h = params.height_m;

    if vy == 0.0 {
        // Pure drop; resting on the ground is a zero-length flight.
        return Ok(if h > 0.0 { (2.0 * h / g).sqrt() } else { 0.0 });
    }

    // Discriminant for 0.5*g*t^2 - vy*t - h = 0
    let disc = vy * vy + 2.0 * g * h;
    if disc < 0.0 {
        return Err(FlightError::NoRealSolution);
    }

    let t_land = (vy + disc.sqrt()) / g;
    if t_land < 0.0 {
        return Err(FlightError::NoRealSolution);
    }
    Ok(t_land)
}

pub fn try_solve(params: LaunchParameters) -> Result<FlightSolution, FlightError> {
    if !params.angle_deg.is_finite()
        || !params.speed_mps.is_finite()
        || !params.height_m.is_finite()
        || !params.gravity_mps2.is_finite()
    {
        return Err(FlightError::InvalidInput);
    }
    if params.speed_mps < 0.0 || params.gravity_mps2 <= 0.0 {
        return Err(FlightError::InvalidInput);
    }

    let (vx, vy) = velocity_components(params);
    let t_land = flight_time(params, vy)?;

    Ok(FlightSolution {
        time_of_flight_s: t_land,
        horizontal_range_m: vx * t_land,
        apex_height_m: params.height_m + (vy * vy) / (2.0 * params.gravity_mps2),
        horizontal_velocity_mps: vx,
        vertical_velocity_mps: vy,
        failure: None,
    })
}

/// Total over every input: failures come back as a solution with
/// `is_valid() == false` rather than as an error.
pub fn solve(params: LaunchParameters) -> FlightSolution {
    match try_solve(params) {
        Ok(solution) => solution,
        Err(err) => {
            log::debug!("no trajectory for {params:?}: {err}");
            FlightSolution::invalid(err)
        }
    }
}

/// `steps + 1` time-uniform points from launch to landing, both ends exact.
pub fn sample_trajectory(
    params: LaunchParameters,
    time_of_flight_s: f64,
    steps: usize,
) -> Vec<(f64, f64)> {
    if time_of_flight_s <= 0.0 || steps == 0 {
        return Vec::new();
    }
    (0..=steps)
        .map(|i| {
            let t = if i == steps {
                time_of_flight_s
            } else {
                (i as f64 * time_of_flight_s) / steps as f64
            };
            position_at(params, t)
        })
        .collect()
}
