pub mod error;
pub mod swarm;

pub mod prelude {
    pub use crate::{
        error::*,
        swarm::{
            config::*, engine::*, neighborhood::*, objective::*, particle::*,
        },
    };

    pub use nalgebra;
}
