pub mod archived_task_repository;

pub use archived_task_repository::ArchivedTaskRepository;
