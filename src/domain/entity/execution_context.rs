use serde::{Deserialize, Serialize};

/// Read-only context the engine supplies for one filter invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineExecutionContext {
    pub process_instance_id: i64,
    pub process_definition_id: Option<i64>,
    pub activity_instance_id: Option<i64>,
}

impl EngineExecutionContext {
    pub fn new(process_instance_id: i64) -> Self {
        Self {
            process_instance_id,
            process_definition_id: None,
            activity_instance_id: None,
        }
    }
}
