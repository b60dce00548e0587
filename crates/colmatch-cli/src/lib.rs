//! Library side of the `colmatch` command: logging setup and the
//! load/compare/export workflow.

pub mod logging;
pub mod workflow;
