pub mod cliff_walking;
pub mod errors;
