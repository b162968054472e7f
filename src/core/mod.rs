//! Page logic independent of the DOM: the quiz state machine, counter and
//! background-cycle arithmetic, reveal bookkeeping, navigation state, and
//! the static content they operate on.

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod counter;
pub mod cycler;
pub mod error;
pub mod flashcards;
pub mod nav;
pub mod quiz;
pub mod reveal;
pub mod settings;
#[cfg(test)]
mod tests;

pub use error::{SiteError, SiteResult};
