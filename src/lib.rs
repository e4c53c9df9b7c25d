pub mod cli;
pub mod cowsay;
pub mod error;
pub mod figures;
pub mod input;
pub mod utils;
