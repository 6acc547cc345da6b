pub mod application;
pub mod job;
pub mod profile;
pub mod rating;
pub mod session;
pub mod user;
