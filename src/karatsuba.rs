use crate::addsub::add;
use crate::low_level::{shifted_accumulate, split_digits, sub_assign_digits};
use crate::schoolbook_mul::schoolbook_mul;
use crate::{Base, Digit};

// The middle product multiplies sums that are one digit longer than the halves, so operands
// shorter than this would not shrink when split.
const MIN_SPLIT_LEN: usize = 4;

/// Karatsuba multiplication, falling back to schoolbook below `threshold` digits.
///
/// For non-empty operands the result has exactly `l.len() + r.len()` digits.
pub fn karatsuba_mul(l: &[Digit], r: &[Digit], base: Base, threshold: usize) -> Vec<Digit> {
    if l.is_empty() || r.is_empty() {
        return Vec::new();
    }
    let max_len = std::cmp::max(l.len(), r.len());
    if max_len < std::cmp::max(threshold, MIN_SPLIT_LEN) {
        return schoolbook_mul(l, r, base);
    }
    let split_len = (max_len + 1) / 2;
    let (l1, l0) = split_digits(l, split_len);
    let (r1, r0) = split_digits(r, split_len);
    let prod2 = karatsuba_mul(l1, r1, base, threshold);
    let prod0 = karatsuba_mul(l0, r0, base, threshold);
    let mut prod1 = karatsuba_mul(&add(l1, l0, base), &add(r1, r0, base), base, threshold);
    // (l1 + l0)(r1 + r0) = l1 r1 + l0 r0 + (l1 r0 + l0 r1), so neither subtraction underflows.
    let underflow0 = sub_assign_digits(&mut prod1, &prod0, base);
    let underflow2 = sub_assign_digits(&mut prod1, &prod2, base);
    debug_assert!(
        !underflow0 && !underflow2,
        "middle product smaller than its outer terms"
    );

    let mut digits = vec![0; 2 * split_len + std::cmp::max(prod1.len(), prod2.len())];
    shifted_accumulate(&mut digits, &prod0, 0, base);
    shifted_accumulate(&mut digits, &prod1, split_len, base);
    shifted_accumulate(&mut digits, &prod2, 2 * split_len, base);
    let len = l.len() + r.len();
    debug_assert!(digits.iter().skip(len).all(|&d| d == 0));
    digits.resize(len, 0);
    digits
}
