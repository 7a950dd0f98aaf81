use derive_more::{Display, Error};

use crate::Vector;

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum GeometryError {
    /// Two operands that must share a dimension were a 2D and a 3D vector.
    #[display("Vectors [{left}, {right}] have different dimensions")]
    DimensionMismatch { left: Vector, right: Vector },
    /// The operation is not defined for the given kind of operand.
    #[display("{message}")]
    InvalidArgument { message: String },
}

impl GeometryError {
    pub fn dimension_mismatch(left: impl Into<Vector>, right: impl Into<Vector>) -> Self {
        Self::DimensionMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
