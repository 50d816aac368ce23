//! Consul build, context assembly, and docker invocation for convoy.
//!
//! # Pipeline
//!
//! ```text
//! convoy
//!   1. Build consul   ── make linux (in the consul checkout)
//!   2. Read artifact  ── <checkout>/pkg/bin/linux_<arch>/consul
//!   3. Assemble       ── temp dir: Dockerfile + entrypoint.sh + consul
//!   4. Build image    ── docker build . -t convoy:local
//! ```
//!
//! Every external command goes through the [`executor::CommandExecutor`]
//! trait so tests can assert argument lists and working directories without
//! spawning anything. Commands run with an explicit per-command working
//! directory; the convoy process itself never changes its own.
//!
//! The assembled context directory is deliberately left on disk after the
//! run so a failed `docker build` can be rerun or inspected by hand.

pub mod consul;
pub mod context;
pub mod docker;
pub mod executor;
pub mod pipeline;

pub use executor::{CommandExecutor, RealExecutor};
