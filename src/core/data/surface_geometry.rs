/// Bounding rectangle of the display surface in client (CSS/window) space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to turn a client-space click into a logical pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceGeometry {
    pub bounds: ClientRect,
    /// Canvas pixels per client unit, horizontally.
    pub scale_x: f64,
    /// Canvas pixels per client unit, vertically.
    pub scale_y: f64,
    /// Canvas pixels per logical pixel.
    pub pixel_size: u32,
}

impl SurfaceGeometry {
    /// Derives the scale factors from the canvas backing size and its on-screen bounds.
    ///
    /// A degenerate bound (zero or negative extent) falls back to a scale of 1.
    #[must_use]
    pub fn from_canvas(
        bounds: ClientRect,
        canvas_width: u32,
        canvas_height: u32,
        pixel_size: u32,
    ) -> Self {
        let scale = |canvas: u32, client: f64| {
            if client > 0.0 && client.is_finite() {
                f64::from(canvas) / client
            } else {
                1.0
            }
        };

        Self {
            bounds,
            scale_x: scale(canvas_width, bounds.width),
            scale_y: scale(canvas_height, bounds.height),
            pixel_size,
        }
    }

    /// Geometry for a surface whose client space is already canvas space.
    #[must_use]
    pub fn identity(canvas_width: u32, canvas_height: u32, pixel_size: u32) -> Self {
        Self {
            bounds: ClientRect {
                left: 0.0,
                top: 0.0,
                width: f64::from(canvas_width),
                height: f64::from(canvas_height),
            },
            scale_x: 1.0,
            scale_y: 1.0,
            pixel_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_canvas_computes_scale() {
        let bounds = ClientRect {
            left: 10.0,
            top: 20.0,
            width: 200.0,
            height: 100.0,
        };

        let geometry = SurfaceGeometry::from_canvas(bounds, 400, 50, 2);

        assert_eq!(geometry.scale_x, 2.0);
        assert_eq!(geometry.scale_y, 0.5);
        assert_eq!(geometry.pixel_size, 2);
    }

    #[test]
    fn test_from_canvas_degenerate_bounds_use_unit_scale() {
        let bounds = ClientRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: f64::NAN,
        };

        let geometry = SurfaceGeometry::from_canvas(bounds, 400, 50, 1);

        assert_eq!(geometry.scale_x, 1.0);
        assert_eq!(geometry.scale_y, 1.0);
    }
}
