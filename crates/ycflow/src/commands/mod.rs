pub mod file;
pub mod instance;
