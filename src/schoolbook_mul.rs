use crate::low_level::{add_digits, mul_digits, shifted_accumulate};
use crate::{Base, Digit};

/// Multiplies `l` by a single digit. The result is one digit longer than `l`.
pub fn multiply_by_digit(l: &[Digit], d: Digit, base: Base) -> Vec<Digit> {
    let mut digits = Vec::with_capacity(l.len() + 1);
    let mut carry = 0;
    for &l_digit in l {
        let (prod, mul_carry) = mul_digits(l_digit, d, base);
        let (prod, add_carry) = add_digits(prod, carry, 0, base);
        digits.push(prod);
        // mul_carry <= base - 2, so this stays a single digit.
        carry = mul_carry + add_carry;
    }
    digits.push(carry);
    digits
}

pub fn schoolbook_mul(l: &[Digit], r: &[Digit], base: Base) -> Vec<Digit> {
    if l.is_empty() || r.is_empty() {
        return Vec::new();
    }
    let mut digits = vec![0; l.len() + r.len()];
    for (j, &r_digit) in r.iter().enumerate() {
        if r_digit == 0 {
            continue;
        }
        let row = multiply_by_digit(l, r_digit, base);
        shifted_accumulate(&mut digits, &row, j, base);
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    #[test]
    fn hardcoded() {
        assert_eq!(schoolbook_mul(&[7], &[8], Base::DECIMAL), vec![6, 5]);
        assert_eq!(schoolbook_mul(&[2, 3], &[4, 5], Base::DECIMAL), vec![8, 2, 7, 1]);
        assert_eq!(multiply_by_digit(&[9, 9, 9], 9, Base::DECIMAL), vec![1, 9, 9, 8]);
        assert_eq!(multiply_by_digit(&[], 9, Base::DECIMAL), vec![0]);
    }

    #[test]
    fn large_base() {
        let b = Base::new(u64::MAX).unwrap();
        let top = u64::MAX - 1;
        // (B-1)^2 = (B-2) * B + 1
        assert_eq!(schoolbook_mul(&[top], &[top], b), vec![1, top - 1]);
        assert_eq!(multiply_by_digit(&[top, top], top, b), vec![1, top, top - 1]);
    }

    proptest! {
        #[test]
        fn mul_matches_u128((b, l, r) in any_digit_pair(0..6)) {
            let prod = schoolbook_mul(&l, &r, b);
            assert_eq!(value(&prod, b), value(&l, b) * value(&r, b));
            if !l.is_empty() && !r.is_empty() {
                assert_eq!(prod.len(), l.len() + r.len());
            }
            assert!(prod.iter().all(|&d| d < b.get()));
        }
    }
    proptest! {
        #[test]
        fn mul_zero((b, l, _r) in any_digit_pair(0..20)) {
            assert!(schoolbook_mul(&l, &[], b).is_empty());
            assert!(schoolbook_mul(&[], &l, b).is_empty());
        }
    }
    proptest! {
        #[test]
        fn mul_identity((b, l, _r) in any_digit_pair(1..20)) {
            let prod = schoolbook_mul(&l, &[1], b);
            assert_eq!(&prod[..l.len()], &l[..]);
            assert_eq!(prod[l.len()], 0);
        }
    }
    proptest! {
        #[test]
        fn multiply_by_digit_matches_u128(
            (b, l, d) in any_base().prop_flat_map(|b| (Just(b), any_digits(b, 0..10), 0..b.get())),
        ) {
            let prod = multiply_by_digit(&l, d, b);
            assert_eq!(prod.len(), l.len() + 1);
            assert_eq!(value(&prod, b), value(&l, b) * d as u128);
        }
    }
}
