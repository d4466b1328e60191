use crate::core::ballistics::{FlightSolution, LaunchParameters};

/// Uniform physical-to-surface mapping for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    /// Surface row of ground level (physical y = 0).
    pub offset_y: f64,
}

fn usable_scale(candidate: f64) -> f64 {
    if candidate.is_finite() && candidate > 0.0 {
        candidate
    } else {
        1.0
    }
}

impl ViewTransform {
    pub fn fit(
        solution: &FlightSolution,
        params: LaunchParameters,
        surface_width: f64,
        surface_height: f64,
        padding: f64,
    ) -> Self {
        // Keep at least one drawable pixel on each axis.
        let max_padding = ((surface_width.min(surface_height) - 1.0) / 2.0).max(0.0);
        let padding = padding.clamp(0.0, max_padding);
        let drawable_w = surface_width - 2.0 * padding;
        let drawable_h = surface_height - 2.0 * padding;

        let scale_x = usable_scale(drawable_w / solution.horizontal_range_m);
        let scale_y = usable_scale(drawable_h / (solution.apex_height_m + params.height_m));
        let scale = scale_x.min(scale_y);

        Self {
            scale,
            offset_x: padding,
            offset_y: surface_height - padding - params.height_m * scale,
        }
    }

    pub fn baseline_row(&self) -> f64 {
        self.offset_y
    }

    pub fn to_surface(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.offset_x + x * self.scale, self.offset_y - y * self.scale)
    }

    pub fn to_physical(&self, (px, py): (f64, f64)) -> (f64, f64) {
        ((px - self.offset_x) / self.scale, (self.offset_y - py) / self.scale)
    }
}
