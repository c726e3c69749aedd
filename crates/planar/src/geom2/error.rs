/// Reasons a set of points does not form the requested shape.
///
/// Lengths in `UnequalSides` and `DiagonalMismatch` are squared.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidShapeError {
    #[error("point `{name}` has a non-finite coordinate")]
    NonFinite { name: String },
    #[error("neighbor `{name}` is {found} from the center, expected {expected}")]
    UnequalRadius {
        name: String,
        expected: f64,
        found: f64,
    },
    #[error("side {from}->{to} has non-positive length")]
    NonPositiveSide { from: String, to: String },
    #[error("side {from}->{to} has squared length {found}, expected {expected}")]
    UnequalSides {
        from: String,
        to: String,
        expected: f64,
        found: f64,
    },
    #[error("diagonal {from}->{to} has squared length {found}, expected {expected}")]
    DiagonalMismatch {
        from: String,
        to: String,
        expected: f64,
        found: f64,
    },
}
