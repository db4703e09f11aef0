use crate::core::data::logical_coordinate::LogicalCoordinate;
use crate::core::data::surface_geometry::SurfaceGeometry;

fn clamp_axis(canvas_position: f64, pixel_size: u32, extent: u32) -> u32 {
    let max_index = i64::from(extent.saturating_sub(1));
    let logical = (canvas_position / f64::from(pixel_size.max(1))).floor();

    // NaN casts to 0 and infinities saturate, so the clamp covers every input.
    (logical as i64).clamp(0, max_index) as u32
}

/// Maps a client-space point onto the renderer's logical pixel grid.
///
/// Points outside the surface clamp to the nearest edge; this never fails.
#[must_use]
pub fn client_to_logical_coords(
    client_x: f64,
    client_y: f64,
    geometry: &SurfaceGeometry,
    width: u32,
    height: u32,
) -> LogicalCoordinate {
    let canvas_left = (client_x - geometry.bounds.left) * geometry.scale_x;
    let canvas_top = (client_y - geometry.bounds.top) * geometry.scale_y;

    LogicalCoordinate {
        row: clamp_axis(canvas_top, geometry.pixel_size, height),
        col: clamp_axis(canvas_left, geometry.pixel_size, width),
    }
}
