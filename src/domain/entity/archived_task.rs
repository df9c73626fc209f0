use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::repository::archived_task_repository::TaskSearchQuery;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedTaskInstance {
    pub id: i64,
    pub name: String,
    pub parent_process_instance_id: i64,
    pub executed_by: i64,
    pub assignee_id: Option<i64>,
    pub terminal: bool,
    pub reached_state_date: DateTime<Utc>,
}

impl ArchivedTaskInstance {
    pub fn new(id: i64, name: String, parent_process_instance_id: i64, executed_by: i64) -> Self {
        Self {
            id,
            name,
            parent_process_instance_id,
            executed_by,
            assignee_id: None,
            terminal: true,
            reached_state_date: Utc::now(),
        }
    }

    /// Whether this archive row satisfies every equality filter of the query.
    pub fn matches(&self, query: &TaskSearchQuery) -> bool {
        self.parent_process_instance_id == query.parent_process_instance_id
            && self.name == query.name
            && self.terminal == query.terminal
    }
}
