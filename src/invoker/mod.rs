// src/invoker/mod.rs

pub mod loader;
pub mod runner;


pub use loader::load_profile;
pub use runner::{run, run_with_backend, validate_user_profile, Invocation};
