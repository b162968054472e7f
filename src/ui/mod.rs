//! Leptos components and the browser glue behind them

pub mod context;
#[cfg(not(feature = "ssr"))]
pub mod dom;
pub mod flashcards;
pub mod hero;
pub mod nav;
pub mod pages;
pub mod quiz;
pub mod reveal;
pub mod sections;
pub mod stats;
pub mod styles;

pub use pages::{HomePage, NotFoundPage};
