use anyhow::Result;

use crate::core::ballistics::{FlightError, FlightSolution, LaunchParameters, sample_trajectory};
use crate::core::constants::{
    AXIS_TICKS, BARREL_HALF_WIDTH_PX, BARREL_LENGTH_PX, BASE_RADIUS_PX, CAPTION_FONT_PX,
    CURVE_SAMPLES, CURVE_WIDTH_PX, DEFAULT_PADDING_PX, TICK_FONT_PX, TICK_LENGTH_PX,
};
use crate::core::surface::{DrawSurface, Point, Rgb, Stroke, TextAnchor};
use crate::core::window::ViewTransform;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub padding: f64,
    pub draw_ticks: bool,
    pub tick_count: usize,
    pub curve_samples: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING_PX,
            draw_ticks: true,
            tick_count: AXIS_TICKS,
            curve_samples: CURVE_SAMPLES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    /// Surface was cleared and left blank.
    NoTrajectory(FlightError),
    Drawn {
        view: ViewTransform,
        curve_points: usize,
    },
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn draw_axes<S: DrawSurface + ?Sized>(
    surface: &mut S,
    view: &ViewTransform,
    width: f64,
    options: &RenderOptions,
) -> Result<()> {
    // The fitted margin, which may be tighter than the requested padding.
    let margin = view.offset_x;
    let left = margin;
    let right = width - margin;
    let top = margin;
    let ground = view.baseline_row();
    let axis = Stroke {
        color: Rgb::BLACK,
        width: 1.0,
    };

    surface.stroke_path(&[(left, ground), (right, ground)], axis)?;
    surface.stroke_path(&[(left, ground), (left, top)], axis)?;

    if options.draw_ticks && options.tick_count > 0 {
        let world_max_x = (right - left) / view.scale;
        let world_max_y = (ground - top) / view.scale;

        for i in 0..=options.tick_count {
            let t = i as f64 / options.tick_count as f64;

            let x = left + t * (right - left);
            surface.stroke_path(&[(x, ground), (x, ground + TICK_LENGTH_PX)], axis)?;
            surface.draw_text(
                &format_axis_value(t * world_max_x, world_max_x),
                (x, ground + TICK_LENGTH_PX + 2.0),
                TextAnchor::TopCenter,
                TICK_FONT_PX,
                Rgb::AXIS_GRAY,
            )?;

            let y = ground - t * (ground - top);
            surface.stroke_path(&[(left - TICK_LENGTH_PX, y), (left, y)], axis)?;
            surface.draw_text(
                &format_axis_value(t * world_max_y, world_max_y),
                (left - TICK_LENGTH_PX - 2.0, y),
                TextAnchor::RightMiddle,
                TICK_FONT_PX,
                Rgb::AXIS_GRAY,
            )?;
        }
    }

    surface.draw_text(
        "Distance (m)",
        (right, ground - 4.0),
        TextAnchor::BottomRight,
        CAPTION_FONT_PX,
        Rgb::AXIS_GRAY,
    )?;
    surface.draw_text(
        "Height (m)",
        (left + 4.0, top),
        TextAnchor::BottomLeft,
        CAPTION_FONT_PX,
        Rgb::AXIS_GRAY,
    )
}

/// Barrel corners rotated about `anchor`. Rows grow downward, so the launch
/// angle is applied negated.
pub fn launcher_barrel(anchor: Point, angle_deg: f64) -> [Point; 4] {
    let theta = angle_deg.to_radians();
    let (sin_a, cos_a) = theta.sin_cos();
    [
        (0.0, -BARREL_HALF_WIDTH_PX),
        (BARREL_LENGTH_PX, -BARREL_HALF_WIDTH_PX),
        (BARREL_LENGTH_PX, BARREL_HALF_WIDTH_PX),
        (0.0, BARREL_HALF_WIDTH_PX),
    ]
    .map(|(u, v)| {
        (
            anchor.0 + (u * cos_a) + (v * sin_a),
            anchor.1 - (u * sin_a) + (v * cos_a),
        )
    })
}

fn draw_launcher<S: DrawSurface + ?Sized>(
    surface: &mut S,
    view: &ViewTransform,
    params: LaunchParameters,
) -> Result<()> {
    let anchor = (view.offset_x, view.baseline_row() - params.height_m * view.scale);
    surface.fill_polygon(&launcher_barrel(anchor, params.angle_deg), Rgb::BLACK)?;
    surface.fill_circle(anchor, BASE_RADIUS_PX, Rgb::BLACK)
}

fn draw_curve<S: DrawSurface + ?Sized>(
    surface: &mut S,
    view: &ViewTransform,
    solution: &FlightSolution,
    params: LaunchParameters,
    samples: usize,
) -> Result<usize> {
    let points: Vec<Point> = sample_trajectory(params, solution.time_of_flight_s, samples)
        .into_iter()
        .map(|p| view.to_surface(p))
        .collect();
    if points.is_empty() {
        return Ok(0);
    }
    surface.stroke_path(
        &points,
        Stroke {
            color: Rgb::RED,
            width: CURVE_WIDTH_PX,
        },
    )?;
    Ok(points.len())
}

/// Clears `surface` and draws one complete frame for `solution`.
///
/// An invalid solution leaves the surface blank and reports
/// [`RenderOutcome::NoTrajectory`]. A zero-length flight draws the axes and
/// launcher with no curve.
pub fn render<S: DrawSurface + ?Sized>(
    solution: &FlightSolution,
    params: LaunchParameters,
    surface: &mut S,
    width: f64,
    height: f64,
    options: &RenderOptions,
) -> Result<RenderOutcome> {
    surface.clear()?;

    if let Some(failure) = solution.failure {
        return Ok(RenderOutcome::NoTrajectory(failure));
    }

    let view = ViewTransform::fit(solution, params, width, height, options.padding);
    draw_axes(surface, &view, width, options)?;
    draw_launcher(surface, &view, params)?;

    let curve_points = if solution.time_of_flight_s > 0.0 {
        draw_curve(surface, &view, solution, params, options.curve_samples)?
    } else {
        0
    };

    Ok(RenderOutcome::Drawn { view, curve_points })
}
