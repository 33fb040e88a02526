mod analytics;
mod contacts;
mod jobs;
mod moderation;
mod pending;
mod users;

pub use analytics::AdminAnalytics;
pub use contacts::AdminContacts;
pub use jobs::AdminJobs;
pub use pending::AdminPendingJobs;
pub use users::AdminUsers;
