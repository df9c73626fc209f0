pub mod archived_task_in_memory;

pub use archived_task_in_memory::InMemoryArchivedTaskRepository;
