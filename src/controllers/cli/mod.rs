pub mod args;
pub mod render_controller;
pub mod run;
