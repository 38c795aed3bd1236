use std::ops::{Add, Mul};

use crate::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `y` from `x` to `x + dx`.
///
/// `dydx` is the right-hand side of `dy/dx = f(y, x)`. The state type only
/// needs addition and scaling by `f64`, so plain floats and fixed-size
/// nalgebra vectors both work. The four stages are evaluated in order, each
/// feeding the next; no error estimate is produced.
///
/// Meant to be driven by an external loop over a half-open grid:
///
/// ```
/// use rk4::rk4_step;
///
/// let (t0, tf, dt) = (0.0, 10.0, 1.0);
/// let mut pos = 0.0;
/// let mut t = t0;
/// while t < tf {
///     pos = rk4_step(|_pos, t| t * t, pos, t, dt);
///     t += dt;
/// }
/// // Antiderivative of t^2 is t^3/3
/// assert!((pos - 1000.0 / 3.0).abs() < 1e-9);
/// ```
pub fn rk4_step<Y, F>(dydx: F, y: Y, x: f64, dx: f64) -> Y
where
    Y: Copy + Add<Output = Y> + Mul<f64, Output = Y>,
    F: Fn(Y, f64) -> Y,
{
    let k1 = dydx(y, x) * dx;
    let k2 = dydx(y + k1 * 0.5, x + 0.5 * dx) * dx;
    let k3 = dydx(y + k2 * 0.5, x + 0.5 * dx) * dx;
    let k4 = dydx(y + k3, x + dx) * dx;
    y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0)
}

/// Number of interior sample points covering `[x0, xf)` by steps of `dx`.
///
/// Matches the arange rule: `ceil((xf - x0) / dx)` when the ratio is finite
/// and positive, zero otherwise (degenerate interval, sign-mismatched or
/// zero `dx`).
fn step_count(x0: f64, xf: f64, dx: f64) -> usize {
    let steps = (xf - x0) / dx;
    if steps.is_finite() && steps > 0.0 {
        steps.ceil() as usize
    } else {
        0
    }
}

/// Integrate `dy/dx = f(y, x)` across `[x0, xf)` with fixed step `dx`.
///
/// The grid is half-open: `xf` is never used as a step start. Index 0 of the
/// returned trajectory holds `(x0, y0)`, and one trailing x point past the
/// last interior sample keeps `xs` and `ys` the same length; that trailing
/// point can exceed `xf` when `dx` does not divide `xf - x0` evenly.
///
/// A degenerate interval (`x0 >= xf` with positive `dx`, a step whose sign
/// points away from `xf`, or `dx == 0`) yields the singleton trajectory
/// `([x0], [y0])`.
///
/// ```
/// use rk4::integrate;
///
/// let traj = integrate(|_y, x| x * x, 0.0, 0.0, 1.0, 0.01);
/// let (_x_end, y_end) = traj.last().unwrap();
/// assert!((y_end - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn integrate<Y, F>(dydx: F, y0: Y, x0: f64, xf: f64, dx: f64) -> Trajectory<Y>
where
    Y: Copy + Add<Output = Y> + Mul<f64, Output = Y>,
    F: Fn(Y, f64) -> Y,
{
    let n = step_count(x0, xf, dx);

    let mut xs = Vec::with_capacity(n + 1);
    let mut ys = Vec::with_capacity(n + 1);

    let mut y = y0;
    ys.push(y);

    for i in 0..n {
        let x = x0 + i as f64 * dx;
        xs.push(x);
        y = rk4_step(&dydx, y, x, dx);
        ys.push(y);
    }

    // Trailing x point keeps the two sequences the same length.
    xs.push(x0 + n as f64 * dx);

    Trajectory { xs, ys }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
