use crate::core::data::complex::Complex;
use crate::core::precision::Real;

/// Runs `z <- z² + c` from `z` while `|z|² < 4` and fewer than `max_iterations`
/// steps have been taken, returning the number of steps.
///
/// Once `|z|` exceeds 2 the orbit diverges, so the test is exact. A result of
/// `max_iterations` means the orbit stayed bounded as far as it was followed.
pub fn escape_time<R: Real>(z: Complex<R>, c: Complex<R>, max_iterations: u32) -> u32 {
    let four = R::from_u32(4);
    let two = R::from_u32(2);

    let Complex {
        real: mut x,
        imag: mut y,
    } = z;
    let mut x2 = x.clone() * x.clone();
    let mut y2 = y.clone() * y.clone();
    let mut iteration = 0;

    while iteration < max_iterations && x2.clone() + y2.clone() < four {
        y = two.clone() * x * y + c.imag.clone();
        x = x2 - y2 + c.real.clone();
        x2 = x.clone() * x.clone();
        y2 = y.clone() * y.clone();
        iteration += 1;
    }

    iteration
}
