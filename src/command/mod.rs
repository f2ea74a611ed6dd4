mod build;
mod install;

pub use build::{Build, NpmScript};
pub use install::Install;
