//! xcsh: Interactive Domain-Organized Shell
//!
//! A navigable shell over a catalog of cloud-management API resources. Resource
//! types are grouped into domains; the user moves between root, domain and
//! action contexts and commands are completed by that context before being
//! handed to an executor.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod shell;
pub mod tier;
