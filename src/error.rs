use crate::Digit;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("base must be at least 2, got {0}")]
    InvalidBase(u64),
    #[error("digit {digit} is out of range for base {base}")]
    InvalidDigit { digit: Digit, base: u64 },
    #[error("'{0}' is not a decimal digit")]
    InvalidCharacter(char),
    #[error("subtraction underflow: subtrahend is larger than minuend")]
    ArithmeticUnderflow,
    #[error("operands use different bases ({left} and {right})")]
    BaseMismatch { left: u64, right: u64 },
}
