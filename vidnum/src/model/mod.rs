pub mod convergence;
pub mod toy;
