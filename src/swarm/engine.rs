use nalgebra::DVector;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Normal;
use tracing::debug;

use crate::{
    error::ConfigError,
    swarm::{
        config::SwarmConfig, neighborhood::RingNeighborhood, objective::Objective,
        particle::Particle,
    },
};

/// Local-best particle swarm optimizer over a ring topology.
///
/// The engine exclusively owns the swarm and every aggregate history for the
/// duration of a run; callers read results through the accessors after
/// [`LocalBestPso::optimize`] returns.
///
/// Randomness comes from a single `StdRng` seeded at construction, so a run
/// is fully reproducible from `(config, seed)`.
pub struct LocalBestPso<F: Objective> {
    config: SwarmConfig,
    objective: F,
    swarm: Vec<Particle>,
    neighborhood: RingNeighborhood,
    noise: Normal<f64>,
    rng: StdRng,
    global_best_position: Option<DVector<f64>>,
    global_best_score: f64,
    /// Running global best, one entry per iteration.
    score_history: Vec<f64>,
    /// Swarm-average kinetic energy, one entry per iteration.
    average_kinetic_energy_history: Vec<f64>,
    /// Personal-best score per iteration, outer index = particle.
    personal_best_history: Vec<Vec<f64>>,
    /// Local-best score per iteration, outer index = particle.
    local_best_history: Vec<Vec<f64>>,
}

impl<F: Objective> LocalBestPso<F> {
    /// Validates the configuration and initializes the swarm.
    ///
    /// Fails fast with [`ConfigError`] before any objective evaluation; a
    /// constructed engine can no longer fail for configuration reasons.
    pub fn new(config: SwarmConfig, objective: F, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let noise = Normal::new(0.0, config.noise_std_dev)
            .map_err(|_| ConfigError::InvalidNoiseStdDev(config.noise_std_dev))?;

        let mut rng = StdRng::seed_from_u64(seed);
        let swarm: Vec<Particle> = (0..config.num_particles)
            .map(|_| Particle::new(&config, &mut rng))
            .collect();

        Ok(Self {
            neighborhood: RingNeighborhood::new(&config),
            personal_best_history: vec![Vec::new(); config.num_particles],
            local_best_history: vec![Vec::new(); config.num_particles],
            config,
            objective,
            swarm,
            noise,
            rng,
            global_best_position: None,
            global_best_score: f64::NEG_INFINITY,
            score_history: Vec::new(),
            average_kinetic_energy_history: Vec::new(),
        })
    }

    /// Runs the configured number of iterations and returns the global best
    /// position and score.
    ///
    /// The loop always runs its full budget; there is no convergence-based
    /// early exit. The position is `None` only when `max_iterations == 0`.
    pub fn optimize(&mut self) -> (Option<DVector<f64>>, f64) {
        for iteration in 0..self.config.max_iterations {
            self.evaluate_and_commit_personal_bests();
            self.log_best_score_histories();
            let total_kinetic_energy = self.update_velocities_and_positions();
            self.aggregate(iteration, total_kinetic_energy);
        }
        (self.global_best_position.clone(), self.global_best_score)
    }

    /// Phase 1, first stage: evaluate every particle and commit personal-best
    /// updates for the whole swarm before anything reads neighbor bests.
    fn evaluate_and_commit_personal_bests(&mut self) {
        for particle in &mut self.swarm {
            let score = self.objective.evaluate(&particle.position);
            particle.energy_history.push(score);
            if score > particle.best_score {
                particle.best_score = score;
                particle.best_position.copy_from(&particle.position);
            }
        }
    }

    /// Phase 1, second stage: log personal- and local-best scores against the
    /// fully committed personal-best snapshot. Running this as a separate
    /// pass keeps the logged local bests independent of particle index order.
    fn log_best_score_histories(&mut self) {
        for index in 0..self.swarm.len() {
            self.personal_best_history[index].push(self.swarm[index].best_score);
            let local_best = self.neighborhood.local_best(&self.swarm, index);
            self.local_best_history[index].push(local_best.best_score);
        }
    }

    /// Phase 2: velocity and position updates against the phase-1 snapshot.
    /// Personal bests are not touched here, so every particle observes a
    /// consistent view of its neighborhood. Returns the summed kinetic
    /// energy.
    fn update_velocities_and_positions(&mut self) -> f64 {
        let mut total_kinetic_energy = 0.0;
        for index in 0..self.swarm.len() {
            let local_best_position = self
                .neighborhood
                .local_best(&self.swarm, index)
                .best_position
                .clone();
            let particle = &mut self.swarm[index];
            particle.update_velocity(&local_best_position, &self.config, &self.noise, &mut self.rng);
            particle.update_position(&self.config);
            total_kinetic_energy += particle.kinetic_energy;
        }
        total_kinetic_energy
    }

    /// Reduction over the swarm: average kinetic energy, global-best update,
    /// and the per-iteration history appends.
    fn aggregate(&mut self, iteration: usize, total_kinetic_energy: f64) {
        let average_kinetic_energy = total_kinetic_energy / self.config.num_particles as f64;
        self.average_kinetic_energy_history.push(average_kinetic_energy);

        for particle in &self.swarm {
            if particle.best_score > self.global_best_score {
                self.global_best_score = particle.best_score;
                self.global_best_position = Some(particle.best_position.clone());
            }
        }
        self.score_history.push(self.global_best_score);

        debug!(
            iteration = iteration + 1,
            max_iterations = self.config.max_iterations,
            global_best_score = self.global_best_score,
            average_kinetic_energy,
            "iteration complete"
        );
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn swarm(&self) -> &[Particle] {
        &self.swarm
    }

    pub fn global_best_position(&self) -> Option<&DVector<f64>> {
        self.global_best_position.as_ref()
    }

    pub fn global_best_score(&self) -> f64 {
        self.global_best_score
    }

    /// Running global best per iteration.
    pub fn score_history(&self) -> &[f64] {
        &self.score_history
    }

    /// Swarm-average kinetic energy per iteration.
    pub fn average_kinetic_energy_history(&self) -> &[f64] {
        &self.average_kinetic_energy_history
    }

    /// Personal-best score trajectories, outer index = particle.
    pub fn personal_best_history(&self) -> &[Vec<f64>] {
        &self.personal_best_history
    }

    /// Local-best score trajectories, outer index = particle.
    pub fn local_best_history(&self) -> &[Vec<f64>] {
        &self.local_best_history
    }

    /// Persists the run's configuration, for pairing saved diagnostics with
    /// the parameters that produced them.
    pub fn save_parameters(&self, path: impl AsRef<std::path::Path>) -> Result<(), ConfigError> {
        self.config.save(path)
    }
}
