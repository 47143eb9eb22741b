//! Tests for the dashboard data model.
//!
//! - `model` - lookups and seed validation
//! - `errors` - error display text and serialization

mod model;
