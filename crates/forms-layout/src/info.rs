//! Computed grid geometry.

/// Column and row origins of a laid out grid.
///
/// Both vectors hold `count + 1` entries: the leading edge of every column or
/// row followed by the trailing edge of the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInfo {
    pub column_origins: Vec<i32>,
    pub row_origins: Vec<i32>,
}

impl LayoutInfo {
    pub fn new(column_origins: Vec<i32>, row_origins: Vec<i32>) -> Self {
        Self { column_origins, row_origins }
    }

    /// Left edge of the grid.
    pub fn x(&self) -> i32 {
        self.column_origins.first().copied().unwrap_or(0)
    }

    /// Top edge of the grid.
    pub fn y(&self) -> i32 {
        self.row_origins.first().copied().unwrap_or(0)
    }

    pub fn width(&self) -> i32 {
        span_of(&self.column_origins)
    }

    pub fn height(&self) -> i32 {
        span_of(&self.row_origins)
    }
}

fn span_of(origins: &[i32]) -> i32 {
    match (origins.first(), origins.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    }
}
