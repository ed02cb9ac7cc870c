use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("value {value} at depth {depth} breaks search order (lower bound {lower:?}, upper bound {upper:?})")]
    OrderViolation {
        value: i32,
        depth: usize,
        lower: Option<i32>,
        upper: Option<i32>,
    },

    #[error("empty value range {low}..{high}")]
    InvalidRange { low: i32, high: i32 },

    #[error("requested {requested} distinct values but the range only holds {available}")]
    NotEnoughValues { requested: usize, available: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
