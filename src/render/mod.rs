// src/render/mod.rs

//! Script rendering.
//!
//! - [`template`] holds the built-in Pig script and its placeholder tokens.
//! - [`substitute`] performs the token replacement.

pub mod substitute;
pub mod template;

pub use substitute::{Substitutions, render};
pub use template::PIG_TEMPLATE;
