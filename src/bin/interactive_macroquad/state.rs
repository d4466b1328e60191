use parabolic_trajectory::core::ballistics::{FlightSolution, LaunchParameters, solve};
use parabolic_trajectory::core::display::DisplayValues;
use parabolic_trajectory::core::inputs::{
    DEFAULT_ANGLE_DEG, DEFAULT_GRAVITY_MPS2, DEFAULT_HEIGHT_M, DEFAULT_SPEED_MPS,
};
use parabolic_trajectory::core::render::RenderOptions;

/// Raw slider positions; the only values the window owns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SliderValues {
    pub(crate) height_m: f32,
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) gravity_mps2: f32,
}

impl SliderValues {
    pub(crate) fn to_params(self) -> LaunchParameters {
        LaunchParameters::new(
            self.height_m as f64,
            self.speed_mps as f64,
            self.angle_deg as f64,
            self.gravity_mps2 as f64,
        )
    }
}

impl Default for SliderValues {
    fn default() -> Self {
        Self {
            height_m: DEFAULT_HEIGHT_M as f32,
            speed_mps: DEFAULT_SPEED_MPS as f32,
            angle_deg: DEFAULT_ANGLE_DEG as f32,
            gravity_mps2: DEFAULT_GRAVITY_MPS2 as f32,
        }
    }
}

pub(crate) struct AppRuntime {
    pub(crate) sliders: SliderValues,
    pub(crate) options: RenderOptions,
    pub(crate) params: LaunchParameters,
    pub(crate) solution: FlightSolution,
    pub(crate) display: DisplayValues,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let sliders = SliderValues::default();
        let params = sliders.to_params();
        let solution = solve(params);
        Self {
            sliders,
            options: RenderOptions::default(),
            params,
            solution,
            display: DisplayValues::from_solution(&solution),
        }
    }

    /// Re-solves only when a slider moved; returns whether it did.
    pub(crate) fn refresh(&mut self) -> bool {
        let params = self.sliders.to_params();
        if params == self.params {
            return false;
        }
        self.params = params;
        self.solution = solve(params);
        self.display = DisplayValues::from_solution(&self.solution);
        log::debug!("parameters changed to {params:?}: {}", self.display);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_sliders_do_not_resolve() {
        let mut state = AppRuntime::new();
        assert!(!state.refresh());
    }

    #[test]
    fn moved_slider_updates_solution_and_display() {
        let mut state = AppRuntime::new();
        state.sliders.speed_mps = 20.0;
        state.sliders.angle_deg = 90.0;

        assert!(state.refresh());
        assert!(state.solution.is_valid());
        assert_eq!(state.display.time_of_flight, "4.08");

        state.sliders.speed_mps = -5.0;
        assert!(state.refresh());
        assert_eq!(state.display, DisplayValues::placeholder());
    }
}
