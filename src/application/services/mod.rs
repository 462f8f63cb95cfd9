pub mod seeding;

pub use seeding::{SeedOutcome, seed};
