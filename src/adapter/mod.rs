pub mod actor_filter;
pub mod repository;
