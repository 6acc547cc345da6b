pub mod categories;
pub mod filters;
pub mod handlers;
pub mod validation;
