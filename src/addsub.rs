use crate::low_level::{add_digits, digit_at, sub_assign_digits};
use crate::{Base, BigNat, Digit, Error};

/// Sums two digit vectors. The result is always one digit longer than the longer operand;
/// the final digit holds the carry even when it is zero.
pub fn add(l: &[Digit], r: &[Digit], base: Base) -> Vec<Digit> {
    let len = std::cmp::max(l.len(), r.len());
    let mut digits = Vec::with_capacity(len + 1);
    let mut carry = 0;
    for i in 0..len {
        let (sum, c) = add_digits(digit_at(l, i), digit_at(r, i), carry, base);
        digits.push(sum);
        carry = c;
    }
    digits.push(carry);
    digits
}

/// Subtracts `other` from `target` in place, keeping the length of `target`.
///
/// Fails with `ArithmeticUnderflow` if `other` is larger than `target`, in which case `target`
/// is left holding the difference modulo `base^target.len()`.
pub fn sub_assign(target: &mut [Digit], other: &[Digit], base: Base) -> Result<(), Error> {
    if sub_assign_digits(target, other, base) {
        return Err(Error::ArithmeticUnderflow);
    }
    Ok(())
}

impl BigNat {
    pub fn checked_add(&self, other: &Self) -> Result<Self, Error> {
        let base = self.check_base(other)?;
        Ok(BigNat {
            base,
            digits: add(&self.digits, &other.digits, base),
        })
    }
    pub fn checked_sub(&self, other: &Self) -> Result<Self, Error> {
        let base = self.check_base(other)?;
        let mut out = self.clone();
        sub_assign(&mut out.digits, &other.digits, base)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    #[test]
    fn add_hardcoded() {
        assert_eq!(add(&[9], &[9], Base::DECIMAL), vec![8, 1]);
        assert_eq!(add(&[], &[], Base::DECIMAL), vec![0]);
        assert_eq!(add(&[1, 1], &[1], Base::BINARY), vec![0, 0, 1]);
        assert_eq!(add(&[3], &[4, 2], Base::DECIMAL), vec![7, 2, 0]);
    }

    #[test]
    fn sub_hardcoded() {
        let mut a = vec![0, 1];
        sub_assign(&mut a, &[5], Base::DECIMAL).unwrap();
        assert_eq!(a, vec![5, 0]);

        let mut a = vec![5];
        assert_eq!(
            sub_assign(&mut a, &[0, 1], Base::DECIMAL),
            Err(Error::ArithmeticUnderflow)
        );

        // Subtrahend longer than the minuend but only by zero digits.
        let mut a = vec![7];
        sub_assign(&mut a, &[2, 0, 0], Base::DECIMAL).unwrap();
        assert_eq!(a, vec![5]);
    }

    proptest! {
        #[test]
        fn add_matches_u128((b, l, r) in any_digit_pair(0..8)) {
            let sum = add(&l, &r, b);
            assert_eq!(sum.len(), std::cmp::max(l.len(), r.len()) + 1);
            assert_eq!(value(&sum, b), value(&l, b) + value(&r, b));
            assert!(sum.iter().all(|&d| d < b.get()));
        }
    }
    proptest! {
        #[test]
        fn add_commutes((b, l, r) in any_digit_pair(0..12)) {
            let lr = add(&l, &r, b);
            let rl = add(&r, &l, b);
            assert_eq!(lr, rl);
        }
    }
    proptest! {
        #[test]
        fn additive_identity((b, l, _r) in any_digit_pair(0..8)) {
            let sum = add(&l, &[], b);
            assert_eq!(&sum[..l.len()], &l[..]);
            assert_eq!(sum[l.len()], 0);
        }
    }
    proptest! {
        #[test]
        fn sub_matches_u128((b, l, r) in any_digit_pair(0..8)) {
            let (lv, rv) = (value(&l, b), value(&r, b));
            let mut diff = l.clone();
            let result = sub_assign(&mut diff, &r, b);
            assert_eq!(diff.len(), l.len());
            if lv >= rv {
                assert_eq!(result, Ok(()));
                assert_eq!(value(&diff, b), lv - rv);
            } else {
                assert_eq!(result, Err(Error::ArithmeticUnderflow));
            }
        }
    }
    proptest! {
        #[test]
        fn add_then_sub((b, l, r) in any_digit_pair(0..8)) {
            let mut sum = add(&l, &r, b);
            sub_assign(&mut sum, &r, b).unwrap();
            assert_eq!(value(&sum, b), value(&l, b));
        }
    }

    #[test]
    fn bignat_add_sub() {
        let a = BigNat::from_u64(1234, Base::DECIMAL);
        let b = BigNat::from_u64(987, Base::DECIMAL);
        assert_eq!(a.checked_add(&b).unwrap().to_u128(), Some(2221));
        assert_eq!(a.checked_sub(&b).unwrap().to_u128(), Some(247));
        assert_eq!(b.checked_sub(&a), Err(Error::ArithmeticUnderflow));
        assert!(a.checked_sub(&a).unwrap().is_zero());
    }
}
