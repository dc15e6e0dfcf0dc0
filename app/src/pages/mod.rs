pub mod about;
pub mod projects;
