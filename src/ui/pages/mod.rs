//! Application pages
//!
//! - Home page (the whole site)
//! - Not found page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
