pub mod cli;
pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;
