//! Chi-squared distribution support built on gamma-family special functions
//!
//! Hand-rolled approximations in the spirit of keeping the numeric core
//! dependency-free: Lanczos log-gamma, the regularized lower incomplete
//! gamma function (power series below `a + 1`, Lentz continued fraction
//! above), and a bisection inversion for the quantile. Accuracy is far
//! beyond what a 1% significance threshold requires.

/// Lanczos coefficients for g = 7, n = 9
const LANCZOS: [f64; 8] = [
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Base term of the Lanczos series
const LANCZOS_BASE: f64 = 0.999_999_999_999_809_93;

/// Series/continued-fraction convergence tolerance
const CONVERGENCE_EPS: f64 = 1e-15;

/// Iteration cap for the series and continued fraction
const MAX_ITERATIONS: usize = 500;

/// Natural logarithm of the gamma function
///
/// Uses the Lanczos approximation with reflection for arguments below 0.5.
/// Accurate to roughly 14 significant digits over the range used here.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection formula: gamma(x) * gamma(1 - x) = pi / sin(pi x)
        return (std::f64::consts::PI / (std::f64::consts::PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut acc = LANCZOS_BASE;
    for (i, c) in LANCZOS.iter().enumerate() {
        acc += c / (x + (i + 1) as f64);
    }

    let t = x + 7.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
}

/// Power series for the regularized lower incomplete gamma, valid for x < a + 1
fn gamma_p_series(a: f64, x: f64) -> f64 {
    let mut term_divisor = a;
    let mut sum = 1.0 / a;
    let mut delta = sum;

    for _ in 0..MAX_ITERATIONS {
        term_divisor += 1.0;
        delta *= x / term_divisor;
        sum += delta;
        if delta.abs() < sum.abs() * CONVERGENCE_EPS {
            break;
        }
    }

    sum * (-x + a * x.ln() - ln_gamma(a)).exp()
}

/// Lentz continued fraction for the regularized upper incomplete gamma, valid for x >= a + 1
fn gamma_q_continued_fraction(a: f64, x: f64) -> f64 {
    let tiny = 1e-300;
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / tiny;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..MAX_ITERATIONS {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an.mul_add(d, b);
        if d.abs() < tiny {
            d = tiny;
        }
        c = b + an / c;
        if c.abs() < tiny {
            c = tiny;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < CONVERGENCE_EPS {
            break;
        }
    }

    (-x + a * x.ln() - ln_gamma(a)).exp() * h
}

/// Regularized lower incomplete gamma function P(a, x)
///
/// Returns 0.0 for non-positive x or a, the conventional boundary value.
pub fn regularized_gamma_p(a: f64, x: f64) -> f64 {
    if a <= 0.0 || x <= 0.0 {
        return 0.0;
    }
    if x < a + 1.0 {
        gamma_p_series(a, x)
    } else {
        1.0 - gamma_q_continued_fraction(a, x)
    }
}

/// Cumulative distribution function of a chi-squared variable with `dof` degrees of freedom
pub fn chi_squared_cdf(x: f64, dof: usize) -> f64 {
    regularized_gamma_p(dof as f64 / 2.0, x / 2.0)
}

/// Inverse CDF (quantile) of the chi-squared distribution
///
/// Solves `cdf(q) = p` by bisection, which is cheap at the call rate of
/// the filter (once per resolution) and monotone-safe for every degree of
/// freedom. Out-of-range probabilities clamp to the distribution bounds:
/// `p <= 0` yields 0.0 and `p >= 1` yields infinity.
pub fn chi_squared_quantile(p: f64, dof: usize) -> f64 {
    if dof == 0 || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let dof_f = dof as f64;
    let mut lo = 0.0_f64;
    let mut hi = (2.0 * dof_f).sqrt().mul_add(10.0, dof_f + 10.0);
    while chi_squared_cdf(hi, dof) < p {
        hi *= 2.0;
    }

    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if chi_squared_cdf(mid, dof) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    0.5 * (lo + hi)
}
