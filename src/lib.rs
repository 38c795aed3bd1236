pub mod integrator;
pub mod trajectory;

// Flat re-exports: the whole surface is two functions and their output type
pub use integrator::{integrate, rk4_step};
pub use trajectory::Trajectory;
