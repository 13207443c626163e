pub mod cli;
pub mod config;
pub mod logging;
pub mod remote;
pub mod ui;
pub mod vendor;
