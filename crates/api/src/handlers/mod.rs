pub mod billing;
pub mod dashboard;
pub mod project;
pub mod users;
