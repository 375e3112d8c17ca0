//! Data Transfer Objects for API requests and responses.
//!
//! Query parameters are parsed with Serde (`serde_with` for values that go
//! through `FromStr`) and checked with `validator`. Responses wrap the domain
//! result types, which serialize themselves.

pub mod health;
pub mod query;
pub mod reports;
