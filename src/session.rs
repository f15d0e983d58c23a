pub(crate) mod config;
pub(crate) mod runner;
pub(crate) mod script;
