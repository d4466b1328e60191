use macroquad::prelude::*;

use parabolic_trajectory::core::display::DisplayValues;

use crate::constants::TITLE_Y;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_hud(
    display: &DisplayValues,
    failure: Option<&str>,
    left: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Projectile Trajectory",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    draw_ui_text(
        &display.to_string(),
        left,
        screen_h - 40.0,
        24,
        header_color,
        font,
    );
    if let Some(reason) = failure {
        draw_ui_text(
            &format!("No trajectory: {reason}"),
            left,
            screen_h - 14.0,
            20,
            MAROON,
            font,
        );
    }
}
