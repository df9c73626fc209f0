pub mod adapter;
pub mod domain;
pub mod usecase;
