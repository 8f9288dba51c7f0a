use nalgebra::DVector;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::swarm::config::SwarmConfig;

/// One candidate solution in the swarm.
///
/// Position and velocity always stay component-wise within the configured
/// bounds; clamping is total, so updates never signal out-of-bounds errors.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: DVector<f64>,
    pub velocity: DVector<f64>,
    /// Position that achieved `best_score`.
    pub best_position: DVector<f64>,
    /// Best objective value this particle has observed, starting at -inf.
    pub best_score: f64,
    /// Half the squared norm of the current velocity.
    pub kinetic_energy: f64,
    /// Raw objective value per iteration (not the running personal best).
    pub energy_history: Vec<f64>,
    /// Kinetic energy per iteration, recorded on each velocity update.
    pub kinetic_energy_history: Vec<f64>,
}

impl Particle {
    /// Creates a particle with a uniformly random position (one independent
    /// draw per dimension) and zero velocity.
    pub fn new(config: &SwarmConfig, rng: &mut impl Rng) -> Self {
        let (min_pos, max_pos) = config.position_bounds;
        let position = DVector::from_fn(config.dimensions, |_, _| {
            rng.random_range(min_pos..=max_pos)
        });
        Self {
            best_position: position.clone(),
            position,
            velocity: DVector::zeros(config.dimensions),
            best_score: f64::NEG_INFINITY,
            kinetic_energy: 0.0,
            energy_history: Vec::new(),
            kinetic_energy_history: Vec::new(),
        }
    }

    /// Applies the velocity update rule:
    ///
    /// `v <- w*v + c1*r1*(pbest - x) + c2*r2*(lbest - x) + noise`
    ///
    /// `r1` and `r2` are single uniform draws shared across all dimensions of
    /// this call; the Gaussian noise is drawn independently per dimension.
    /// The result is clamped to the velocity bounds, after which the kinetic
    /// energy is recomputed and appended to its history.
    pub fn update_velocity(
        &mut self,
        local_best_position: &DVector<f64>,
        config: &SwarmConfig,
        noise: &Normal<f64>,
        rng: &mut impl Rng,
    ) {
        let r1: f64 = rng.random();
        let r2: f64 = rng.random();
        let (min_vel, max_vel) = config.velocity_bounds;

        for d in 0..config.dimensions {
            let cognitive = config.c1 * r1 * (self.best_position[d] - self.position[d]);
            let social = config.c2 * r2 * (local_best_position[d] - self.position[d]);
            let updated = config.w * self.velocity[d] + cognitive + social + noise.sample(rng);
            self.velocity[d] = updated.clamp(min_vel, max_vel);
        }

        self.kinetic_energy = 0.5 * self.velocity.norm_squared();
        self.kinetic_energy_history.push(self.kinetic_energy);
    }

    /// Integrates the position one `dt` step and clamps it to the position
    /// bounds. History logging is the caller's responsibility.
    pub fn update_position(&mut self, config: &SwarmConfig) {
        let (min_pos, max_pos) = config.position_bounds;
        for d in 0..config.dimensions {
            self.position[d] =
                (self.position[d] + self.velocity[d] * config.dt).clamp(min_pos, max_pos);
        }
    }
}
