#[cfg(test)]
mod common;

#[cfg(test)]
mod admin_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod application_tests;

#[cfg(test)]
mod employee_tests;

#[cfg(test)]
mod job_moderation_tests;
