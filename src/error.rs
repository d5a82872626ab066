use thiserror::Error;

use crate::math::Coord;

/// Top-level error type for the sweep core.
#[derive(Debug, Error)]
pub enum ScanclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to input coordinates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("coordinate {value} exceeds the supported range [-{max}, {max}]")]
    CoordinateOutOfRange { value: Coord, max: Coord },
}

/// Errors related to the edge and point arenas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("edge not found")]
    EdgeNotFound,

    #[error("point not found")]
    PointNotFound,

    #[error("edge is not linked into the {0}")]
    NotInList(&'static str),

    #[error("edge is already linked into the {0}")]
    AlreadyInList(&'static str),
}

/// Convenience type alias for results using [`ScanclipError`].
pub type Result<T> = std::result::Result<T, ScanclipError>;
