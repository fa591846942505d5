//! Scripts for deploying a compiled contract and confirming its creation.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod factory;
pub mod report;
pub mod types;
pub mod utils;
