use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entity::archived_task::ArchivedTaskInstance;
use crate::domain::repository::archived_task_repository::{TaskSearchQuery, TaskSearchResult};
use crate::domain::repository::ArchivedTaskRepository;

/// InMemoryArchivedTaskRepository はインメモリのアーカイブ済みタスクリポジトリ。
/// 統合テストおよび組み込みホスト用。
pub struct InMemoryArchivedTaskRepository {
    tasks: RwLock<Vec<ArchivedTaskInstance>>,
}

impl InMemoryArchivedTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert(&self, task: ArchivedTaskInstance) {
        let mut tasks = self.tasks.write().await;
        tasks.push(task);
    }
}

impl Default for InMemoryArchivedTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArchivedTaskRepository for InMemoryArchivedTaskRepository {
    async fn search(&self, query: &TaskSearchQuery) -> anyhow::Result<TaskSearchResult> {
        let tasks = self.tasks.read().await;
        let matched: Vec<ArchivedTaskInstance> = tasks
            .iter()
            .filter(|t| t.matches(query))
            .cloned()
            .collect();
        let count = matched.len() as u64;
        let records = matched
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        Ok(TaskSearchResult { count, records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, name: &str, process_instance_id: i64, executed_by: i64) -> ArchivedTaskInstance {
        ArchivedTaskInstance::new(id, name.to_string(), process_instance_id, executed_by)
    }

    #[tokio::test]
    async fn search_applies_every_filter() {
        let repo = InMemoryArchivedTaskRepository::new();
        repo.insert(task(1, "step1", 83, 4786)).await;
        repo.insert(task(2, "step2", 83, 4786)).await;
        repo.insert(task(3, "step1", 84, 4786)).await;
        let mut open = task(4, "step1", 83, 9999);
        open.terminal = false;
        repo.insert(open).await;

        let query = TaskSearchQuery::terminal_by_name(83, "step1".to_string());
        let result = repo.search(&query).await.unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].id, 1);
    }

    #[tokio::test]
    async fn search_counts_beyond_the_window() {
        let repo = InMemoryArchivedTaskRepository::new();
        for id in 0..5 {
            repo.insert(task(id, "step1", 83, 100 + id)).await;
        }

        let mut query = TaskSearchQuery::terminal_by_name(83, "step1".to_string());
        query.limit = 3;
        let result = repo.search(&query).await.unwrap();
        assert_eq!(result.count, 5);
        assert_eq!(result.records.len(), 3);
    }

    #[tokio::test]
    async fn search_honours_the_offset() {
        let repo = InMemoryArchivedTaskRepository::new();
        for id in 0..5 {
            repo.insert(task(id, "step1", 83, 100 + id)).await;
        }

        let mut query = TaskSearchQuery::terminal_by_name(83, "step1".to_string());
        query.offset = 3;
        let result = repo.search(&query).await.unwrap();
        assert_eq!(result.count, 5);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].id, 3);
    }

    #[tokio::test]
    async fn search_empty_repository() {
        let repo = InMemoryArchivedTaskRepository::new();
        let query = TaskSearchQuery::terminal_by_name(83, "step1".to_string());
        let result = repo.search(&query).await.unwrap();
        assert_eq!(result.count, 0);
        assert!(result.records.is_empty());
    }
}
