//! dhcpd reservation synchronization and comparison tooling.
//!
//! This library backs the `dhcpd-sync` binary, which keeps a locally
//! consumed dhcpd reservations file synchronized with an authoritative IPAM
//! export and reloads the service only when the managed configuration
//! actually changed.
//!
//! # Architecture
//!
//! The reconciliation cycle runs Fetch → sanity check → atomic write →
//! conditional reload, on a fixed interval:
//!
//! - [`config`] — TOML settings for the sync daemon (endpoint, paths,
//!   commands, intervals)
//! - [`fetch`] — authenticated retrieval of the reservation export
//! - [`cycle`] — the post-fetch half of a cycle: sanity gate, commit,
//!   conditional reload
//! - [`writer`] — staged, atomic replacement of the managed file
//! - [`fingerprint`] — content digest over the managed configuration set
//! - [`validate`] — external syntax check of the candidate configuration
//! - [`reload`] — fingerprint-gated validate-and-restart of the service
//! - [`error`] — the failure taxonomy shared by the cycle steps
//! - [`report`] — terminal-friendly colored comparison output
//! - [`logging`] — tracing subscriber setup
//!
//! Any cycle error is fatal: the process logs it and exits, leaving retry
//! to an external supervisor. Record parsing and diffing live in
//! `reservation-diff-core`.

pub mod config;
pub mod cycle;
pub mod error;
pub mod fetch;
pub mod fingerprint;
pub mod logging;
pub mod reload;
pub mod report;
pub mod validate;
pub mod writer;
