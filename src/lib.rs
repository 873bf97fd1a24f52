pub mod archive;
pub mod classifier;
pub mod cli;
pub mod generator;
pub mod settings;
