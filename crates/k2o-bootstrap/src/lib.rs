pub mod activation;
pub mod env;
pub mod error;
pub mod interpreter;
pub mod runner;

pub use error::BootstrapError;
