use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::execution_context::EngineExecutionContext;
use crate::domain::entity::filter_parameters::{
    FilterConfig, FilterParameters, ParameterValidationError,
};
use crate::domain::repository::ArchivedTaskRepository;
use crate::usecase::filter_task_executors::{
    FilterTaskExecutorsError, FilterTaskExecutorsInput, FilterTaskExecutorsUseCase,
};

#[derive(Debug, thiserror::Error)]
pub enum UserFilterError {
    #[error(transparent)]
    InvalidParameters(#[from] ParameterValidationError),

    #[error(transparent)]
    Filter(#[from] FilterTaskExecutorsError),
}

/// Host-engine extension point: narrows the candidate users for a human
/// task. The engine validates the configuration once, then invokes `filter`
/// per routing decision with a fresh context and parameter map.
#[async_trait]
pub trait ActorFilter: Send + Sync {
    fn validate_input_parameters(
        &self,
        parameters: &FilterParameters,
    ) -> Result<(), ParameterValidationError>;

    async fn filter(
        &self,
        context: &EngineExecutionContext,
        parameters: &FilterParameters,
    ) -> Result<Vec<i64>, UserFilterError>;
}

/// Filters the candidate users to the ones who executed a task specified by
/// its name within the same process instance. When a large number of task
/// instances carry that name, only the first 2000 archive rows are
/// considered.
pub struct SameTaskUserFilter {
    usecase: FilterTaskExecutorsUseCase,
}

impl SameTaskUserFilter {
    pub fn new(task_repo: Arc<dyn ArchivedTaskRepository>) -> Self {
        Self {
            usecase: FilterTaskExecutorsUseCase::new(task_repo),
        }
    }
}

#[async_trait]
impl ActorFilter for SameTaskUserFilter {
    fn validate_input_parameters(
        &self,
        parameters: &FilterParameters,
    ) -> Result<(), ParameterValidationError> {
        FilterConfig::from_parameters(parameters).map(|_| ())
    }

    async fn filter(
        &self,
        context: &EngineExecutionContext,
        parameters: &FilterParameters,
    ) -> Result<Vec<i64>, UserFilterError> {
        let config = FilterConfig::from_parameters(parameters)?;
        let input = FilterTaskExecutorsInput {
            process_instance_id: context.process_instance_id,
            usertask_name: config.usertask_name,
        };
        let output = self.usecase.execute(&input).await?;
        Ok(output.user_ids)
    }
}
