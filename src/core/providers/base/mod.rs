//! Module
//!
//! Contains base components shared by all providers

pub mod connection_pool;

pub use connection_pool::{ConnectionPool, PoolConfig, UpstreamRequest};
