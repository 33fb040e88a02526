mod contact;
mod home;
mod job_detail;
mod jobs;
mod login;
mod not_found;
mod register;

pub use contact::Contact;
pub use home::Home;
pub use job_detail::JobDetail;
pub use jobs::Jobs;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
