//! HTML pages for browsers.
//!
//! Server-side rendering with Askama templates. The index page lists every
//! destination domain with its count; each domain links to a page with its
//! own count and history chart.
//!
//! # Modules
//!
//! - [`filters`] - Custom Askama filters shared by the templates
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod filters;
pub mod handlers;
pub mod routes;
