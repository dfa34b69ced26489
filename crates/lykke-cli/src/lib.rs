/*
[INPUT]:  Crate modules
[OUTPUT]: Public surface of the Lykke command-line client
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod cli;
pub mod config;

pub use cli::{Cli, Command, run};
pub use config::CliConfig;
