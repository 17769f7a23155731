use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid algebra dimension {dim}: expected between 1 and {max}")]
    InvalidDimension { dim: usize, max: usize },

    #[error("unknown blade '{name}' in an algebra of dimension {dim}")]
    UnknownBlade { name: String, dim: usize },

    #[error("incompatible algebras: {lhs} and {rhs}")]
    IncompatibleAlgebra { lhs: String, rhs: String },

    #[error("invalid tolerance {tolerance}: expected a finite, non-negative value")]
    InvalidTolerance { tolerance: f64 },

    #[error("multivector {value} is not invertible")]
    NotInvertible { value: String },
}
