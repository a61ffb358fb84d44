use crate::interpreter::evaluator::binary::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operator whose result did not fit.
        operator: Operator,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at column {position}: Division by zero.")
            },
            Self::Overflow { operator, position } => write!(f,
                                                            "Error at column {position}: Integer overflow while computing '{operator}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
