use nalgebra::DVector;

/// A scalar objective to maximize over a bounded region.
///
/// The contract is strict maximization: higher return values are better, and
/// callers solving a minimization problem negate their objective themselves.
/// `evaluate` must be safe to call `num_particles * max_iterations` times and
/// must not observe or mutate swarm state.
pub trait Objective {
    fn evaluate(&self, position: &DVector<f64>) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&DVector<f64>) -> f64,
{
    fn evaluate(&self, position: &DVector<f64>) -> f64 {
        self(position)
    }
}

/// Negated sphere function; global maximum 0 at the origin.
pub struct SphereMaximization;

impl Objective for SphereMaximization {
    fn evaluate(&self, position: &DVector<f64>) -> f64 {
        -position.norm_squared()
    }
}

/// Negated Rastrigin function; global maximum 0 at the origin.
pub struct RastriginMaximization;

impl Objective for RastriginMaximization {
    fn evaluate(&self, position: &DVector<f64>) -> f64 {
        let n = position.len() as f64;
        let sum: f64 = position
            .iter()
            .map(|&x| x * x - 10.0 * (2.0 * std::f64::consts::PI * x).cos())
            .sum();
        -(10.0 * n + sum)
    }
}

/// Negated Rosenbrock function; global maximum 0 at (1, ..., 1).
pub struct RosenbrockMaximization;

impl Objective for RosenbrockMaximization {
    fn evaluate(&self, position: &DVector<f64>) -> f64 {
        let cost: f64 = position
            .iter()
            .zip(position.iter().skip(1))
            .map(|(&x, &x_next)| {
                100.0 * (x_next - x * x).powi(2) + (1.0 - x).powi(2)
            })
            .sum();
        -cost
    }
}
