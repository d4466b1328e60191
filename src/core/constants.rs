pub const EARTH_GRAVITY_MPS2: f64 = 9.81;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 400;
pub const DEFAULT_PADDING_PX: f64 = 20.0;

pub const AXIS_TICKS: usize = 10;
pub const TICK_LENGTH_PX: f64 = 5.0;
pub const TICK_FONT_PX: f64 = 10.0;
pub const CAPTION_FONT_PX: f64 = 12.0;
pub const CURVE_SAMPLES: usize = 1000;
pub const CURVE_WIDTH_PX: f64 = 2.0;

// Launcher glyph, in surface pixels before rotation.
pub const BARREL_LENGTH_PX: f64 = 40.0;
pub const BARREL_HALF_WIDTH_PX: f64 = 5.0;
pub const BASE_RADIUS_PX: f64 = 10.0;

pub const PLACEHOLDER: &str = "--";
