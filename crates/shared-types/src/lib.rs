pub mod error;
pub mod envelope;
pub mod feature_flags;
pub mod i18n;

// Accounts
pub mod models;

// Job board domain
pub mod application;
pub mod common;
pub mod company;
pub mod contact;
pub mod dashboard;
pub mod job;
pub mod profile;

// Client view state
pub mod view;

pub use error::*;
pub use envelope::*;
pub use feature_flags::*;
pub use i18n::*;
pub use models::*;

pub use application::*;
pub use common::*;
pub use company::*;
pub use contact::*;
pub use dashboard::*;
pub use job::*;
pub use profile::*;
pub use view::*;
