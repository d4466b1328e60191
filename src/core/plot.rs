use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Circle, Color, DrawingArea, DrawingBackend, IntoDrawingArea, IntoFont,
    PathElement, Polygon, RGBColor, SVGBackend, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::core::ballistics::LaunchParameters;
use crate::core::pipeline::{SimulationReport, simulate};
use crate::core::render::RenderOptions;
use crate::core::surface::{DrawSurface, Point, Rgb, Stroke, TextAnchor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

fn round_i32(value: f64) -> i32 {
    value.round() as i32
}

fn to_backend_points(points: &[Point]) -> Vec<(i32, i32)> {
    points
        .iter()
        .map(|&(x, y)| (round_i32(x), round_i32(y)))
        .collect()
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn text_pos(anchor: TextAnchor) -> Pos {
    match anchor {
        TextAnchor::TopCenter => Pos::new(HPos::Center, VPos::Top),
        TextAnchor::RightMiddle => Pos::new(HPos::Right, VPos::Center),
        TextAnchor::BottomLeft => Pos::new(HPos::Left, VPos::Bottom),
        TextAnchor::BottomRight => Pos::new(HPos::Right, VPos::Bottom),
    }
}

/// [`DrawSurface`] over any plotters backend. Output is written on
/// [`PlottersSurface::present`], or by the backend itself when dropped
/// unpresented.
pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    pub fn new(backend: DB) -> Self {
        Self {
            area: backend.into_drawing_area(),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.area.dim_in_pixel()
    }

    pub fn present(&self) -> Result<()> {
        self.area
            .present()
            .map_err(|e| anyhow!("failed to write trajectory image: {e}"))
    }
}

impl<DB: DrawingBackend> DrawSurface for PlottersSurface<DB> {
    fn clear(&mut self) -> Result<()> {
        self.area
            .fill(&WHITE)
            .map_err(|e| anyhow!("failed to clear drawing area: {e}"))
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        let width = round_i32(stroke.width).max(1) as u32;
        self.area
            .draw(&PathElement::new(
                to_backend_points(points),
                rgb(stroke.color).stroke_width(width),
            ))
            .map_err(|e| anyhow!("failed to draw path: {e}"))
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<()> {
        self.area
            .draw(&Polygon::new(to_backend_points(points), rgb(color).filled()))
            .map_err(|e| anyhow!("failed to draw polygon: {e}"))
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<()> {
        self.area
            .draw(&Circle::new(
                (round_i32(center.0), round_i32(center.1)),
                round_i32(radius),
                rgb(color).filled(),
            ))
            .map_err(|e| anyhow!("failed to draw circle: {e}"))
    }

    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        anchor: TextAnchor,
        size_px: f64,
        color: Rgb,
    ) -> Result<()> {
        let style = ("sans-serif", size_px)
            .into_font()
            .color(&rgb(color))
            .pos(text_pos(anchor));
        self.area
            .draw_text(text, &style, (round_i32(at.0), round_i32(at.1)))
            .map_err(|e| anyhow!("failed to draw text '{text}': {e}"))
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trajectory".to_string());
    path.with_file_name(format!(".partial-{name}"))
}

/// Runs `write` against a sibling staging file and moves it onto `path` only
/// when it succeeds. Plotters backends save themselves on drop, so a failed
/// pass still produces a file; that file is removed here.
fn write_staged<T>(path: &Path, write: impl FnOnce(&Path) -> Result<T>) -> Result<T> {
    let staging = staging_path(path);
    match write(&staging) {
        Ok(value) => {
            fs::rename(&staging, path)
                .with_context(|| format!("failed to move image into {}", path.display()))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(cleanup) = fs::remove_file(&staging) {
                log::debug!("no staging file to remove at {}: {cleanup}", staging.display());
            }
            Err(err)
        }
    }
}

/// Solves, renders and writes one image to `path`. Nothing appears at `path`
/// unless the whole pass succeeds.
pub fn write_image(
    path: &Path,
    format: ImageFormat,
    (width, height): (u32, u32),
    params: LaunchParameters,
    options: &RenderOptions,
) -> Result<SimulationReport> {
    let size = (width as f64, height as f64);
    write_staged(path, |staging| match format {
        ImageFormat::Png => {
            let mut surface = PlottersSurface::new(BitMapBackend::new(staging, (width, height)));
            let report = simulate(params, &mut surface, size, options)?;
            surface.present()?;
            Ok(report)
        }
        ImageFormat::Svg => {
            let mut surface = PlottersSurface::new(SVGBackend::new(staging, (width, height)));
            let report = simulate(params, &mut surface, size, options)?;
            surface.present()?;
            Ok(report)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::EARTH_GRAVITY_MPS2;

    #[test]
    fn svg_output_contains_the_curve() {
        let mut buffer = String::new();
        {
            let mut surface = PlottersSurface::new(SVGBackend::with_string(&mut buffer, (800, 400)));
            let params = LaunchParameters::new(10.0, 15.0, 30.0, EARTH_GRAVITY_MPS2);
            let options = RenderOptions {
                draw_ticks: false,
                ..RenderOptions::default()
            };
            simulate(params, &mut surface, (800.0, 400.0), &options).expect("render to svg");
            surface.present().expect("present svg");
        }

        assert!(buffer.starts_with("<svg"));
        assert!(buffer.contains("<polyline"));
        assert!(buffer.contains("<polygon"));
        assert!(buffer.contains("<circle"));
    }

    #[test]
    fn invalid_input_renders_a_blank_svg() {
        let mut buffer = String::new();
        {
            let mut surface = PlottersSurface::new(SVGBackend::with_string(&mut buffer, (200, 100)));
            let params = LaunchParameters::new(0.0, -5.0, 45.0, EARTH_GRAVITY_MPS2);
            let report = simulate(params, &mut surface, (200.0, 100.0), &RenderOptions::default())
                .expect("render to svg");
            assert!(!report.solution.is_valid());
            surface.present().expect("present svg");
        }

        assert!(!buffer.contains("<polyline"));
        assert!(!buffer.contains("<circle"));
    }

    #[test]
    fn failed_pass_leaves_nothing_at_the_target() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.png");

        let err = write_staged(&path, |staging| -> Result<()> {
            let mut surface = PlottersSurface::new(BitMapBackend::new(staging, (64, 32)));
            surface.clear()?;
            surface.fill_circle((10.0, 10.0), 4.0, Rgb::BLACK)?;
            // Dropped unpresented: the backend still writes the staging file.
            Err(anyhow!("draw failed midway"))
        })
        .expect_err("write should fail");

        assert!(err.to_string().contains("draw failed midway"));
        assert!(!path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn successful_pass_replaces_staging_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("flight.svg");
        let params = LaunchParameters::new(0.0, 10.0, 45.0, EARTH_GRAVITY_MPS2);

        write_image(&path, ImageFormat::Svg, (320, 160), params, &RenderOptions::default())
            .expect("write svg");

        assert!(path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn surface_reports_backend_size() {
        let mut buffer = String::new();
        let surface = PlottersSurface::new(SVGBackend::with_string(&mut buffer, (320, 240)));
        assert_eq!(surface.size(), (320, 240));
    }
}
