extern crate proptest;
use crate::{Base, Digit};
use proptest::prelude::*;

/// Bases small enough that a dozen digits still fit in a `u128`.
pub fn any_base() -> impl Strategy<Value = Base> {
    prop_oneof![Just(2u64), Just(10), Just(16), 2u64..1000].prop_map(|radix| Base::new(radix).unwrap())
}
pub fn any_digits(base: Base, range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Digit>> {
    proptest::collection::vec(0..base.get(), range)
}
pub fn any_digit_pair(
    range: std::ops::Range<usize>,
) -> impl Strategy<Value = (Base, Vec<Digit>, Vec<Digit>)> {
    any_base().prop_flat_map(move |b| (Just(b), any_digits(b, range.clone()), any_digits(b, range.clone())))
}
pub fn value(digits: &[Digit], base: Base) -> u128 {
    digits
        .iter()
        .rev()
        .fold(0u128, |acc, &d| acc * base.get() as u128 + d as u128)
}
pub fn to_digits(mut x: u128, base: Base) -> Vec<Digit> {
    let mut digits = Vec::new();
    while x > 0 {
        digits.push((x % base.get() as u128) as Digit);
        x /= base.get() as u128;
    }
    digits
}
