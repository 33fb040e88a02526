//! Dioxus server functions used by the app. They share the repositories and
//! the REST layer's operations, and report failures as JSON-encoded
//! `AppError`s inside `ServerFnError`.

#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod jobs;
pub use jobs::*;

mod contact;
pub use contact::*;

mod admin;
pub use admin::*;

mod employer;
pub use employer::*;

mod employee;
pub use employee::*;
