pub(crate) mod config;
pub(crate) mod discover;
pub(crate) mod run;
