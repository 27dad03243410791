// Core algorithm exports
pub mod generator;
pub mod rng;
pub mod seed;

pub use generator::{clamp_top_k, MatchGenerator, AUGMENTED_SKILLS, DEFAULT_MAJOR, DEFAULT_SKILLS};
pub use rng::Mulberry32;
pub use seed::{derive_seed, fnv1a};
