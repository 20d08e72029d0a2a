use crate::{Base, Digit};

/// Returns `(x + y + carry) mod base` and the carry out of the position.
pub fn add_digits(x: Digit, y: Digit, carry: Digit, base: Base) -> (Digit, Digit) {
    let base = base.get() as u128;
    let total = x as u128 + y as u128 + carry as u128;
    ((total % base) as Digit, (total / base) as Digit)
}

/// Returns `(x * y) mod base` and the carry out of the position.
pub fn mul_digits(x: Digit, y: Digit, base: Base) -> (Digit, Digit) {
    let base = base.get() as u128;
    let total = x as u128 * y as u128;
    ((total % base) as Digit, (total / base) as Digit)
}

/// Reads past the end of `digits` as zero.
pub fn digit_at(digits: &[Digit], i: usize) -> Digit {
    digits.get(i).copied().unwrap_or(0)
}

/// Splits `digits` at position `k`, returning `(high, low)`.
pub fn split_digits(digits: &[Digit], k: usize) -> (&[Digit], &[Digit]) {
    let (low, high) = digits.split_at(std::cmp::min(k, digits.len()));
    (high, low)
}

/// Adds `addend * base^offset` into `target`, growing `target` if the carry outlives it.
pub fn shifted_accumulate(target: &mut Vec<Digit>, addend: &[Digit], offset: usize, base: Base) {
    if target.len() < offset {
        if addend.iter().all(|&d| d == 0) {
            return;
        }
        target.resize(offset, 0);
    }
    let mut carry = 0;
    for (i, target_digit) in target[offset..].iter_mut().enumerate() {
        if i >= addend.len() && carry == 0 {
            break;
        }
        let (sum, c) = add_digits(*target_digit, digit_at(addend, i), carry, base);
        *target_digit = sum;
        carry = c;
    }
    // Digits of the addend that did not fit, plus whatever carry is left.
    let fitted = target.len() - offset;
    for &addend_digit in addend.iter().skip(fitted) {
        let (sum, c) = add_digits(addend_digit, 0, carry, base);
        target.push(sum);
        carry = c;
    }
    while carry > 0 {
        let (sum, c) = add_digits(carry, 0, 0, base);
        target.push(sum);
        carry = c;
    }
}

/// Subtracts `other` from `target` in place, returning whether a borrow is left over.
/// Digits of `other` past the end of `target` count towards the leftover borrow.
pub fn sub_assign_digits(target: &mut [Digit], other: &[Digit], base: Base) -> bool {
    let mut borrow = 0;
    for (i, target_digit) in target.iter_mut().enumerate() {
        let subtrahend = digit_at(other, i) as u128 + borrow as u128;
        if *target_digit as u128 >= subtrahend {
            *target_digit = (*target_digit as u128 - subtrahend) as Digit;
            borrow = 0;
        } else {
            *target_digit = (*target_digit as u128 + base.get() as u128 - subtrahend) as Digit;
            borrow = 1;
        }
    }
    let overhang = other.iter().skip(target.len()).any(|&d| d != 0);
    borrow != 0 || overhang
}

/// Drops most-significant zero digits.
pub fn trim(digits: &mut Vec<Digit>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}
