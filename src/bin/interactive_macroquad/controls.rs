use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ANGLE_RANGE_DEG, GRAVITY_RANGE_MPS2, HEIGHT_RANGE_M, PANEL_H, PANEL_W, PANEL_X, PANEL_Y,
    SPEED_RANGE_MPS,
};
use crate::state::{AppRuntime, SliderValues};

pub(crate) fn draw_control_panel(state: &mut AppRuntime) {
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Launch Parameters")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Height (m)",
                HEIGHT_RANGE_M.0..HEIGHT_RANGE_M.1,
                &mut state.sliders.height_m,
            );
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                SPEED_RANGE_MPS.0..SPEED_RANGE_MPS.1,
                &mut state.sliders.speed_mps,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_RANGE_DEG.0..ANGLE_RANGE_DEG.1,
                &mut state.sliders.angle_deg,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_RANGE_MPS2.0..GRAVITY_RANGE_MPS2.1,
                &mut state.sliders.gravity_mps2,
            );
            ui.separator();
            if ui.button(None, "Toggle Scale Ticks (T)") {
                state.options.draw_ticks = !state.options.draw_ticks;
            }
            if ui.button(None, "Reset (R)") {
                state.sliders = SliderValues::default();
            }
        });
}

pub(crate) fn apply_hotkeys(state: &mut AppRuntime) {
    if is_key_pressed(KeyCode::T) {
        state.options.draw_ticks = !state.options.draw_ticks;
    }
    if is_key_pressed(KeyCode::R) {
        state.sliders = SliderValues::default();
    }
}
