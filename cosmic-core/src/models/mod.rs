//! The two probability models and their parameter stores.

pub mod asteroid;
pub mod life;

pub use asteroid::{cumulative_collision_probability, AsteroidModelParameters};
pub use life::{probability_of_intelligent_life, LifeModelParameters};
