use anyhow::Result;

pub type Point = (f64, f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(220, 38, 38);
    pub const AXIS_GRAY: Rgb = Rgb(105, 113, 124);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text hangs below the point, centered horizontally.
    TopCenter,
    /// Text ends at the point, centered vertically.
    RightMiddle,
    /// Text starts at the point, sitting on it.
    BottomLeft,
    BottomRight,
}

/// Primitive drawing operations in surface pixels (origin top-left, rows
/// growing downward).
pub trait DrawSurface {
    fn clear(&mut self) -> Result<()>;
    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()>;
    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<()>;
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<()>;
    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        anchor: TextAnchor,
        size_px: f64,
        color: Rgb,
    ) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Path { points: Vec<Point>, stroke: Stroke },
    Polygon { points: Vec<Point>, color: Rgb },
    Circle { center: Point, radius: f64, color: Rgb },
    Text { text: String, at: Point, anchor: TextAnchor },
}

/// Keeps every command issued since the last clear.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Path { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_blank(&self) -> bool {
        self.commands.iter().all(|cmd| *cmd == DrawCommand::Clear)
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.clears += 1;
        Ok(())
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) -> Result<()> {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<()> {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<()> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        at: Point,
        anchor: TextAnchor,
        _size_px: f64,
        _color: Rgb,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            anchor,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_earlier_commands() {
        let mut surface = RecordingSurface::new();
        surface
            .fill_circle((1.0, 2.0), 3.0, Rgb::BLACK)
            .expect("record circle");
        assert!(!surface.is_blank());

        surface.clear().expect("clear");
        assert!(surface.is_blank());
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
    }
}
