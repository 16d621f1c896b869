//! Custom Askama filters.

use thousands::Separable;

/// Sticks commas into large numbers: `1234567` renders as `1,234,567`.
#[askama::filter_fn]
pub fn commafy<T: Separable>(count: T, _: &dyn askama::Values) -> askama::Result<String> {
    Ok(count.separate_with_commas())
}
