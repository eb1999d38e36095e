// library crate for mediaq
// the binary in main.rs is a thin shell over these modules

pub mod cli;
pub mod config;
pub mod logging;
pub mod media;
