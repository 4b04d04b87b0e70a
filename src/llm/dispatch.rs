use serde::Deserialize;
use tracing::info;

use crate::llm::catalog::{render, TaskCatalog, DEFAULT_TASK};
use crate::llm::huggingface::{InferenceClient, InferenceError};

/// Body accepted by `/process`. Both fields are optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub task: String,
}

fn default_task() -> String {
    DEFAULT_TASK.to_string()
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            task: default_task(),
        }
    }
}

impl GenerationRequest {
    pub fn new(task: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            task: task.into(),
        }
    }

    /// Lenient boundary parse: a missing, empty or malformed body becomes
    /// the default request (empty text, `chat` task) instead of an error.
    pub fn from_body(body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct Wire {
            text: Option<String>,
            task: Option<String>,
        }

        match serde_json::from_slice::<Wire>(body) {
            Ok(wire) => Self {
                text: wire.text.unwrap_or_default(),
                task: wire.task.unwrap_or_else(default_task),
            },
            Err(_) => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub task_id: String,
    pub model_id: String,
    pub output: String,
}

/// Resolves a task, renders its prompt and runs it through the inference client.
pub struct Dispatcher {
    catalog: TaskCatalog,
    client: InferenceClient,
}

impl Dispatcher {
    pub fn new(catalog: TaskCatalog, client: InferenceClient) -> Self {
        Self { catalog, client }
    }

    pub async fn dispatch(&self, request: &GenerationRequest) -> Result<Generation, InferenceError> {
        let spec = self.catalog.resolve(&request.task);
        let prompt = render(&spec, &request.text);

        info!(task = %spec.task_id, model = %spec.model_id, "Dispatching generation");
        let output = self.client.generate(&spec.model_id, &prompt).await?;

        Ok(Generation {
            task_id: spec.task_id,
            model_id: spec.model_id,
            output,
        })
    }
}
