//! HTML template rendering handlers.

mod domain;
mod error;
mod index;

pub use domain::domain_handler;
pub use error::error_response;
pub use index::index_handler;
