use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 90.0;
pub const PANEL_W: f32 = 360.0;
pub const PANEL_H: f32 = 230.0;

pub const CANVAS_LEFT: f32 = PANEL_X + PANEL_W + 24.0;
pub const CANVAS_TOP: f32 = PANEL_Y;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const BOTTOM_MARGIN: f32 = 70.0;

pub const TITLE_Y: f32 = 46.0;
pub const WINDOW_BG: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const CANVAS_BG: Color = Color::new(0.98, 0.98, 0.99, 1.0);

pub const HEIGHT_RANGE_M: (f32, f32) = (0.0, 200.0);
pub const SPEED_RANGE_MPS: (f32, f32) = (-10.0, 150.0);
pub const ANGLE_RANGE_DEG: (f32, f32) = (-180.0, 180.0);
pub const GRAVITY_RANGE_MPS2: (f32, f32) = (0.0, 30.0);
