//! Request-rewriting middleware.
//!
//! - [`method_override`] -- maps `POST ...?_method=PUT|DELETE` form
//!   submissions to the corresponding verb before routing.

pub mod method_override;

pub use method_override::method_override;
