pub mod body;
pub mod rng;
pub mod time;
pub mod world;
