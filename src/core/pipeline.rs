use anyhow::Result;

use crate::core::ballistics::{FlightSolution, LaunchParameters, solve};
use crate::core::display::DisplayValues;
use crate::core::render::{RenderOptions, RenderOutcome, render};
use crate::core::surface::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    pub params: LaunchParameters,
    pub solution: FlightSolution,
    pub outcome: RenderOutcome,
    pub display: DisplayValues,
}

/// One full solve-and-draw pass. Flight failures are reported in the result,
/// never as an error; only the surface itself can fail.
pub fn simulate<S: DrawSurface + ?Sized>(
    params: LaunchParameters,
    surface: &mut S,
    (width, height): (f64, f64),
    options: &RenderOptions,
) -> Result<SimulationReport> {
    let solution = solve(params);
    let outcome = render(&solution, params, surface, width, height, options)?;
    let display = DisplayValues::from_solution(&solution);

    match outcome {
        RenderOutcome::NoTrajectory(reason) => log::info!("no trajectory: {reason}"),
        RenderOutcome::Drawn { view, curve_points } => log::debug!(
            "drew {curve_points} curve points at {:.3} px/m ({display})",
            view.scale
        ),
    }

    Ok(SimulationReport {
        params,
        solution,
        outcome,
        display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::EARTH_GRAVITY_MPS2;
    use crate::core::surface::RecordingSurface;

    #[test]
    fn negative_speed_clears_and_shows_placeholders() {
        let mut surface = RecordingSurface::new();
        let params = LaunchParameters::new(0.0, -5.0, 30.0, EARTH_GRAVITY_MPS2);
        let report = simulate(params, &mut surface, (800.0, 400.0), &RenderOptions::default())
            .expect("simulate");

        assert!(surface.is_blank());
        assert_eq!(report.display, DisplayValues::placeholder());
    }

    #[test]
    fn each_run_fully_redraws_the_surface() {
        let mut surface = RecordingSurface::new();
        let options = RenderOptions::default();

        let first = LaunchParameters::new(0.0, 10.0, 45.0, EARTH_GRAVITY_MPS2);
        simulate(first, &mut surface, (800.0, 400.0), &options).expect("first run");
        let first_commands = surface.commands.clone();

        let bad = LaunchParameters::new(0.0, 10.0, 45.0, 0.0);
        simulate(bad, &mut surface, (800.0, 400.0), &options).expect("second run");
        assert!(surface.is_blank());

        simulate(first, &mut surface, (800.0, 400.0), &options).expect("third run");
        assert_eq!(surface.commands, first_commands);
        assert_eq!(surface.clears, 3);
    }
}
