//! Arbitrary-radix natural number arithmetic over least-significant-first digit vectors.
use std::fmt;

pub mod addsub;
pub mod error;
pub mod karatsuba;
pub mod low_level;
pub mod schoolbook_mul;
#[cfg(test)]
mod test_utils;

pub use addsub::{add, sub_assign};
pub use error::Error;
pub use karatsuba::karatsuba_mul;
pub use schoolbook_mul::schoolbook_mul;

pub type Digit = u64;

/// Operand length below which `mul` stops splitting.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// A radix of at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Base(u64);

impl Base {
    pub const BINARY: Base = Base(2);
    pub const DECIMAL: Base = Base(10);
    pub const HEX: Base = Base(16);

    pub fn new(radix: u64) -> Result<Self, Error> {
        if radix < 2 {
            return Err(Error::InvalidBase(radix));
        }
        Ok(Base(radix))
    }
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Base {
    type Error = Error;

    fn try_from(radix: u64) -> Result<Self, Error> {
        Base::new(radix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Schoolbook,
    Karatsuba { threshold: usize },
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Karatsuba {
            threshold: KARATSUBA_THRESHOLD,
        }
    }
}

impl Algorithm {
    pub fn mul(self, l: &[Digit], r: &[Digit], base: Base) -> Vec<Digit> {
        match self {
            Algorithm::Schoolbook => schoolbook_mul(l, r, base),
            Algorithm::Karatsuba { threshold } => karatsuba_mul(l, r, base, threshold),
        }
    }
}

pub fn mul(l: &[Digit], r: &[Digit], base: Base) -> Vec<Digit> {
    Algorithm::default().mul(l, r, base)
}

/// A natural number held as validated digits in a fixed base.
///
/// Digits are not kept trimmed; two values can be equal as numbers while having different
/// lengths, so `PartialEq` compares numeric value rather than representation.
#[derive(Clone)]
pub struct BigNat {
    base: Base,
    digits: Vec<Digit>,
}

impl fmt::Debug for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigNat")
            .field("base", &self.base.get())
            .field("digits", &self.digits)
            .finish()
    }
}

impl PartialEq for BigNat {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.significant_digits() == other.significant_digits()
    }
}
impl Eq for BigNat {}

impl BigNat {
    pub fn zero(base: Base) -> Self {
        BigNat {
            base,
            digits: Vec::new(),
        }
    }
    /// Takes digits least significant first.
    pub fn from_digits(digits: Vec<Digit>, base: Base) -> Result<Self, Error> {
        if let Some(&digit) = digits.iter().find(|&&d| d >= base.get()) {
            return Err(Error::InvalidDigit {
                digit,
                base: base.get(),
            });
        }
        Ok(BigNat { base, digits })
    }
    /// Parses ASCII decimal characters, most significant first, one character per digit.
    pub fn from_digit_str(text: &str, base: Base) -> Result<Self, Error> {
        let mut digits = Vec::with_capacity(text.len());
        for c in text.chars().rev() {
            let digit = c.to_digit(10).ok_or(Error::InvalidCharacter(c))? as Digit;
            if digit >= base.get() {
                return Err(Error::InvalidDigit {
                    digit,
                    base: base.get(),
                });
            }
            digits.push(digit);
        }
        Ok(BigNat { base, digits })
    }
    pub fn from_u64(mut x: u64, base: Base) -> Self {
        let mut digits = Vec::new();
        while x > 0 {
            digits.push(x % base.get());
            x /= base.get();
        }
        BigNat { base, digits }
    }
    /// Reassembles the value, or `None` if it does not fit.
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(self.base.get() as u128)?
                .checked_add(d as u128)
        })
    }
    pub fn base(&self) -> Base {
        self.base
    }
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
    pub fn trim(&mut self) {
        low_level::trim(&mut self.digits);
    }
    pub fn trimmed(mut self) -> Self {
        self.trim();
        self
    }
    fn significant_digits(&self) -> &[Digit] {
        let len = self.digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
        &self.digits[..len]
    }
    fn check_base(&self, other: &Self) -> Result<Base, Error> {
        if self.base != other.base {
            return Err(Error::BaseMismatch {
                left: self.base.get(),
                right: other.base.get(),
            });
        }
        Ok(self.base)
    }
    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        self.mul_with(other, Algorithm::default())
    }
    pub fn mul_with(&self, other: &Self, algorithm: Algorithm) -> Result<Self, Error> {
        let base = self.check_base(other)?;
        Ok(BigNat {
            base,
            digits: algorithm.mul(&self.digits, &other.digits, base),
        })
    }
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.significant_digits();
        if digits.is_empty() {
            return write!(f, "0");
        }
        let separator = if self.base.get() > 10 { ":" } else { "" };
        for (i, digit) in digits.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
