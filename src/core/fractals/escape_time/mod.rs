pub mod algorithm;
pub mod escape;
pub mod max_steps;
