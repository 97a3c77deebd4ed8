pub mod npy;
pub mod params;
pub mod series;

pub use npy::{load_matrix, save_matrix};
pub use params::ParameterBlock;
