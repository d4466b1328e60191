use anyhow::Result;
use macroquad::prelude::*;

use parabolic_trajectory::core::surface::{DrawSurface, Point, Rgb, Stroke, TextAnchor};

use crate::hud::draw_ui_text;

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

/// Canvas rectangle inside the window; surface coordinates are relative to
/// its top-left corner.
pub(crate) struct MacroquadSurface<'a> {
    origin: Vec2,
    size: Vec2,
    background: Color,
    font: Option<&'a Font>,
}

impl<'a> MacroquadSurface<'a> {
    pub(crate) fn new(origin: Vec2, size: Vec2, background: Color, font: Option<&'a Font>) -> Self {
        Self {
            origin,
            size,
            background,
            font,
        }
    }

    pub(crate) fn width(&self) -> f64 {
        self.size.x as f64
    }

    pub(crate) fn height(&self) -> f64 {
        self.size.y as f64
    }

    fn screen(&self, (x, y): Point) -> Vec2 {
        self.origin + vec2(x as f32, y as f32)
    }
}

impl DrawSurface for MacroquadSurface<'_> {
    fn clear(&mut self) -> Result<()> {
        draw_rectangle(
            self.origin.x,
            self.origin.y,
            self.size.x,
            self.size.y,
            self.background,
        );
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        let color = to_color(stroke.color);
        for pair in points.windows(2) {
            let a = self.screen(pair[0]);
            let b = self.screen(pair[1]);
            draw_line(a.x, a.y, b.x, b.y, stroke.width as f32, color);
        }
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<()> {
        if points.len() < 3 {
            return Ok(());
        }
        // Fan from the first vertex; launcher shapes are convex.
        let color = to_color(color);
        let first = self.screen(points[0]);
        for pair in points[1..].windows(2) {
            draw_triangle(first, self.screen(pair[0]), self.screen(pair[1]), color);
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<()> {
        let c = self.screen(center);
        draw_circle(c.x, c.y, radius as f32, to_color(color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        anchor: TextAnchor,
        size_px: f64,
        color: Rgb,
    ) -> Result<()> {
        let font_size = size_px.round().max(1.0) as u16;
        let size = measure_text(text, self.font, font_size, 1.0);
        let p = self.screen(at);
        let (x, y) = match anchor {
            TextAnchor::TopCenter => (p.x - size.width * 0.5, p.y + size.offset_y),
            TextAnchor::RightMiddle => (p.x - size.width, p.y + size.height * 0.5),
            TextAnchor::BottomLeft => (p.x, p.y),
            TextAnchor::BottomRight => (p.x - size.width, p.y),
        };
        draw_ui_text(text, x, y, font_size, to_color(color), self.font);
        Ok(())
    }
}
