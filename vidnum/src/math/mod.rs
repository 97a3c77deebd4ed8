pub mod linalg;
pub mod resistance;
