pub mod archived_task;
pub mod execution_context;
pub mod filter_parameters;
