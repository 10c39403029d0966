//! Greatest common divisor and least common multiple of two positive
//! integers.

/// Compute the greatest common divisor of `m` and `n` by repeated
/// subtraction.
///
/// This is the subtraction form of the Euclidean algorithm: the larger
/// operand is replaced by the difference until both are equal. Runtime grows
/// with the magnitude of the operands (`gcd(1, 1_000_000)` takes a million
/// rounds), not with their bit length.
///
/// Both operands must be strictly positive; with a zero operand the loop
/// never reaches a common value.
pub fn gcd(mut m: u64, mut n: u64) -> u64 {
    debug_assert!(m > 0 && n > 0, "gcd operands must be positive");

    while m != n {
        if m > n {
            m -= n;
        } else {
            n -= m;
        }
    }
    n
}

/// Compute the least common multiple of `m` and `n` from their precomputed
/// greatest common divisor.
///
/// The quotient is taken with true division, so the result is a float even
/// though it is integral whenever the supplied `gcd` is exact. The function
/// does not verify that `gcd` matches the operands.
pub fn lcm(m: u64, n: u64, gcd: u64) -> f64 {
    m as f64 * n as f64 / gcd as f64
}
