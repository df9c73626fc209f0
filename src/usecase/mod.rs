pub mod filter_task_executors;

pub use filter_task_executors::FilterTaskExecutorsUseCase;
