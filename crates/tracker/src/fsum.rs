// Path: crates/tracker/src/fsum.rs

//! Correctly rounded floating-point summation.
//!
//! Shewchuk's algorithm keeps a list of non-overlapping partial sums whose
//! exact total equals the exact total of the inputs, then rounds once at the
//! end. Because the result is the correctly rounded exact sum, it does not
//! depend on the order of the inputs.

/// Error-free addition: `a + b == hi + lo` exactly.
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let hi = a + b;
    let b_virtual = hi - a;
    let a_virtual = hi - b_virtual;
    let lo = (a - a_virtual) + (b - b_virtual);
    (hi, lo)
}

/// Sums `values` with a single final rounding.
///
/// Non-finite inputs follow IEEE addition: any NaN, or infinities of both
/// signs, give NaN; infinities of one sign give that infinity.
pub fn fsum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut partials: Vec<f64> = Vec::new();
    let mut special = 0.0_f64;
    let mut non_finite = false;
    // Plain running sum, used only if an intermediate partial overflows.
    let mut naive = 0.0_f64;

    for value in values {
        naive += value;
        if !value.is_finite() {
            special += value;
            non_finite = true;
            continue;
        }
        let mut x = value;
        partials.retain_mut(|p| {
            let (hi, lo) = two_sum(x, *p);
            x = hi;
            *p = lo;
            lo != 0.0
        });
        partials.push(x);
    }

    if non_finite {
        return special;
    }
    if partials.iter().any(|p| !p.is_finite()) {
        return naive;
    }

    // Add the partials from the largest down, stopping at the first inexact step.
    let mut rev = partials.iter().rev().copied();
    let Some(mut hi) = rev.next() else {
        return 0.0;
    };
    let mut lo = 0.0_f64;
    for y in rev.by_ref() {
        let x = hi;
        hi = x + y;
        let y_rounded = hi - x;
        lo = y - y_rounded;
        if lo != 0.0 {
            break;
        }
    }
    // Round-half-even correction when the remaining partials push `lo` past a tie.
    if let Some(next) = rev.next() {
        if (lo < 0.0 && next < 0.0) || (lo > 0.0 && next > 0.0) {
            let y = lo * 2.0;
            let x = hi + y;
            if y == x - hi {
                hi = x;
            }
        }
    }
    hi
}
