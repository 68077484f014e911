use std::fmt;

use thiserror::Error;

/// Which child slot of a node an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSide {
    Left,
    Right,
}

impl fmt::Display for ChildSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildSide::Left => write!(f, "left"),
            ChildSide::Right => write!(f, "right"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid node shape: {side} child is not a valid tree")]
    InvalidNodeShape { side: ChildSide },
}

pub type TreeResult<T> = Result<T, TreeError>;
