/// Renderer-space pixel address, independent of display scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct LogicalCoordinate {
    pub row: u32,
    pub col: u32,
}

impl LogicalCoordinate {
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}
