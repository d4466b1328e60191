use macroquad::prelude::*;

use parabolic_trajectory::core::render::render;

use crate::constants::{
    BOTTOM_MARGIN, CANVAS_BG, CANVAS_LEFT, CANVAS_TOP, INITIAL_WINDOW_HEIGHT,
    INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, RIGHT_MARGIN, UI_FONT_PATH, WINDOW_BG,
};
use crate::controls::{apply_hotkeys, draw_control_panel};
use crate::hud::draw_hud;
use crate::state::AppRuntime;
use crate::surface::MacroquadSurface;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Trajectory".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    env_logger::init();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        apply_hotkeys(&mut state);
        draw_control_panel(&mut state);
        state.refresh();

        clear_background(WINDOW_BG);

        let canvas_size = vec2(
            (screen_w - CANVAS_LEFT - RIGHT_MARGIN).max(1.0),
            (screen_h - CANVAS_TOP - BOTTOM_MARGIN).max(1.0),
        );
        let mut surface = MacroquadSurface::new(
            vec2(CANVAS_LEFT, CANVAS_TOP),
            canvas_size,
            CANVAS_BG,
            ui_font.as_ref(),
        );
        let (width, height) = (surface.width(), surface.height());
        if let Err(err) = render(
            &state.solution,
            state.params,
            &mut surface,
            width,
            height,
            &state.options,
        ) {
            log::error!("render failed: {err:#}");
        }

        let failure = state.solution.failure.map(|reason| reason.to_string());
        draw_hud(
            &state.display,
            failure.as_deref(),
            CANVAS_LEFT,
            screen_h,
            ui_font.as_ref(),
        );

        next_frame().await;
    }
}
