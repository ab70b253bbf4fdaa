// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Why a single placement was rejected. None of these are fatal; the move
// generator simply discards the candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    NoTiles,
    OccupiedAnchor,
    OutOfBounds,
    InvalidPrefix(String),
    NoConnection,
    FirstMoveMustCoverCenter,
    WordNotFound(String),
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::NoTiles => write!(f, "no tiles to place"),
            PlacementError::OccupiedAnchor => write!(f, "cannot start word on existing tile"),
            PlacementError::OutOfBounds => write!(f, "outside of board"),
            PlacementError::InvalidPrefix(s) => write!(f, "{} prefix not in dictionary", s),
            PlacementError::NoConnection => write!(f, "does not overlap with any other word"),
            PlacementError::FirstMoveMustCoverCenter => {
                write!(f, "first move must be through center tile")
            }
            PlacementError::WordNotFound(s) => write!(f, "{} not in dictionary", s),
        }
    }
}

impl std::error::Error for PlacementError {}
