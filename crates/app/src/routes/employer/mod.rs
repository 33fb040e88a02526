mod applications;
mod candidate;
mod company;
mod job_form;
mod jobs;

pub use applications::EmployerApplications;
pub use candidate::EmployerCandidate;
pub use company::EmployerCompany;
pub use job_form::{EmployerJobEdit, EmployerJobNew};
pub use jobs::EmployerJobs;
