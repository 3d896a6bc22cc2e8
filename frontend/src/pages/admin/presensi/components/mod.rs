pub mod detail;
pub mod filters;
