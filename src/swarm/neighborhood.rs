use crate::swarm::{config::SwarmConfig, particle::Particle};

/// Ring-topology neighborhood lookup over particle indices.
///
/// Indices live on a circle of size `num_particles`; the neighborhood of
/// index `i` is the `radius` particles on each side, plus `i` itself.
#[derive(Clone, Copy, Debug)]
pub struct RingNeighborhood {
    num_particles: usize,
    radius: usize,
}

impl RingNeighborhood {
    pub fn new(config: &SwarmConfig) -> Self {
        Self {
            num_particles: config.num_particles,
            radius: config.neighborhood_size,
        }
    }

    /// Returns the particle holding the best personal-best score within the
    /// ring neighborhood of `index`.
    ///
    /// The scan starts from the particle itself and replaces the candidate
    /// only on a strictly greater `best_score`, so ties favor the particle
    /// already held (in particular, self wins all ties). Returning the whole
    /// particle means position and score queries can never disagree about
    /// which neighbor won.
    pub fn local_best<'a>(&self, swarm: &'a [Particle], index: usize) -> &'a Particle {
        let n = self.num_particles as isize;
        let radius = self.radius as isize;
        let mut best = &swarm[index];
        for offset in -radius..=radius {
            if offset == 0 {
                continue;
            }
            let neighbor_index = (index as isize + offset).rem_euclid(n) as usize;
            let neighbor = &swarm[neighbor_index];
            if neighbor.best_score > best.best_score {
                best = neighbor;
            }
        }
        best
    }
}
