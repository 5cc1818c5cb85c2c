use core::fmt;

/// What made the geometry unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Geometry {
    /// A path needs at least one point.
    NoPoints,
    /// An arc must be split into at least one segment.
    ZeroSegments,
    /// Outlines are at least one pixel thick.
    ZeroStroke,
    /// More colours were asked for than a [`crate::Palette`] can hold.
    TooManyColors,
    /// A polygon needs a palette entry for its outline.
    NoColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapeError {
    InvalidGeometry(Geometry),
}

impl From<Geometry> for ShapeError {
    fn from(value: Geometry) -> Self {
        ShapeError::InvalidGeometry(value)
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidGeometry(g) => {
                let reason = match g {
                    Geometry::NoPoints => "no points",
                    Geometry::ZeroSegments => "zero segments",
                    Geometry::ZeroStroke => "zero stroke width",
                    Geometry::TooManyColors => "too many colors",
                    Geometry::NoColors => "no outline color entry",
                };
                write!(f, "invalid geometry: {reason}")
            }
        }
    }
}

impl core::error::Error for ShapeError {}
