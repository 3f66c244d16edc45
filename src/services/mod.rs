pub mod account_service;
pub mod job_service;
pub mod session_service;
