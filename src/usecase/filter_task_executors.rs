use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::repository::archived_task_repository::TaskSearchQuery;
use crate::domain::repository::ArchivedTaskRepository;

#[derive(Debug, Clone)]
pub struct FilterTaskExecutorsInput {
    pub process_instance_id: i64,
    pub usertask_name: String,
}

#[derive(Debug, Clone)]
pub struct FilterTaskExecutorsOutput {
    /// Executor ids, unique, in first-occurrence order.
    pub user_ids: Vec<i64>,
    /// True when more matches exist than one search window returns.
    pub truncated: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum FilterTaskExecutorsError {
    #[error("problem searching for task named: {usertask_name}")]
    Search {
        usertask_name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("no finished task found with name: {0}")]
    NoFinishedTask(String),
}

pub struct FilterTaskExecutorsUseCase {
    task_repo: Arc<dyn ArchivedTaskRepository>,
}

impl FilterTaskExecutorsUseCase {
    pub fn new(task_repo: Arc<dyn ArchivedTaskRepository>) -> Self {
        Self { task_repo }
    }

    /// Resolves the users who executed a terminal archived task of the given
    /// name within the process instance. Zero matches is a contract failure,
    /// not an empty success: an actor filter that identifies nobody must not
    /// silently return an empty list.
    pub async fn execute(
        &self,
        input: &FilterTaskExecutorsInput,
    ) -> Result<FilterTaskExecutorsOutput, FilterTaskExecutorsError> {
        let query = TaskSearchQuery::terminal_by_name(
            input.process_instance_id,
            input.usertask_name.clone(),
        );

        debug!(
            process_instance_id = input.process_instance_id,
            usertask_name = %input.usertask_name,
            "searching archived human tasks"
        );

        let result = self.task_repo.search(&query).await.map_err(|e| {
            FilterTaskExecutorsError::Search {
                usertask_name: input.usertask_name.clone(),
                source: e,
            }
        })?;

        if result.count == 0 {
            return Err(FilterTaskExecutorsError::NoFinishedTask(
                input.usertask_name.clone(),
            ));
        }

        let mut user_ids: Vec<i64> = Vec::with_capacity(result.records.len());
        for task in &result.records {
            if !user_ids.contains(&task.executed_by) {
                user_ids.push(task.executed_by);
            }
        }

        let truncated = result.count > u64::from(query.limit);
        if truncated {
            warn!(
                usertask_name = %input.usertask_name,
                count = result.count,
                limit = query.limit,
                "archived task search window exceeded, executor list may be incomplete"
            );
        }

        Ok(FilterTaskExecutorsOutput {
            user_ids,
            truncated,
        })
    }
}
