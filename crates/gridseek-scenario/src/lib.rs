//! Scenario generation for gridseek: randomized obstacles and endpoints.
//!
//! A scenario populates a [`Grid`](gridseek_core::Grid) with obstacles at a
//! target density, then selects two distinct free cells as start and goal.
//! All entry points take the random source as an explicit `&mut impl Rng`,
//! so a seeded generator reproduces a scenario exactly.

pub mod density;
pub mod generate;

pub use density::Density;
pub use generate::{
    Scenario, ScenarioError, generate_scenario, pick_free_cell, place_obstacles,
    place_start_and_goal,
};
