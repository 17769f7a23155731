use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Algebra(#[from] algebra::Error),

    #[error("{point} is not a point: a reference point must be a grade-1 multivector")]
    NotAPoint { point: String },
}
