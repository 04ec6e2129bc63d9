//! Trending Digest
//!
//! Collects GitHub trending repositories and developers, keeps the ones
//! tied to accounts the user follows, and sends the result as a single
//! Telegram message. Uses hexagonal (ports & adapters) architecture.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod message;

#[cfg(test)]
mod test_utils;
