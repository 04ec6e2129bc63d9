//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod messenger;
pub mod trending;

pub use github::{GitHubClient, GitHubUser};
pub use messenger::MessageSender;
pub use trending::TrendingSource;
