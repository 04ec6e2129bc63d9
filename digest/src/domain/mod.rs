//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core concepts
//! - `ports`: Trait definitions for external collaborators

pub mod entities;
pub mod ports;
