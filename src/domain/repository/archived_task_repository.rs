use async_trait::async_trait;

use crate::domain::entity::archived_task::ArchivedTaskInstance;

/// Engine-imposed ceiling on one archived-task search window.
pub const MAX_SEARCH_WINDOW: u32 = 2000;

/// Conjunction of equality filters over one pagination window.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSearchQuery {
    pub offset: u32,
    pub limit: u32,
    pub parent_process_instance_id: i64,
    pub name: String,
    pub terminal: bool,
}

impl TaskSearchQuery {
    /// Query for terminal tasks of the given name under one process
    /// instance, over the first (and only) search window.
    pub fn terminal_by_name(parent_process_instance_id: i64, name: String) -> Self {
        Self {
            offset: 0,
            limit: MAX_SEARCH_WINDOW,
            parent_process_instance_id,
            name,
            terminal: true,
        }
    }
}

/// `count` is the total number of matches; `records` only covers the
/// requested window.
#[derive(Debug, Clone)]
pub struct TaskSearchResult {
    pub count: u64,
    pub records: Vec<ArchivedTaskInstance>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArchivedTaskRepository: Send + Sync {
    async fn search(&self, query: &TaskSearchQuery) -> anyhow::Result<TaskSearchResult>;
}
