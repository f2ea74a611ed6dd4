pub(crate) use mkdir::MkdirRunner;
pub(crate) use npm::NpmRunner;
pub(crate) use rsync::RsyncRunner;
pub use runner::{CommandLine, Runner, quote_arg};

mod mkdir;
mod npm;
mod rsync;
mod runner;
