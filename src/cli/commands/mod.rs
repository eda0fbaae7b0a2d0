//! Command implementations

mod init;
mod rules;
mod run;

pub use init::init;
pub use rules::rules;
pub use run::run;
