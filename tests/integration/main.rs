//! Integration tests for AUREX.
//!
//! Organized by area:
//! - cli_test: `aurex` binary behavior (help, config, simulate)
//! - transport_test: public transport and simulator API

mod helpers;

mod cli_test;
mod transport_test;
