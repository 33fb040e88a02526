pub mod decline_dialog;
pub mod job_card;
pub mod selects;
pub mod status_badge;

pub use decline_dialog::DeclineJobDialog;
pub use job_card::JobCard;
pub use selects::{CategorySelect, JobTypeSelect};
pub use status_badge::{ApplicationStatusBadge, ContactStatusBadge, JobStatusBadge};
