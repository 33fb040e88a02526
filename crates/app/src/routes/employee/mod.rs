mod applications;
mod profile;
mod saved;

pub use applications::EmployeeApplications;
pub use profile::EmployeeProfilePage;
pub use saved::EmployeeSavedJobs;
