//! Task catalog and prompt rendering
//!
//! Maps a task identifier to the model slot it runs on and the prompt
//! template wrapped around the caller's text. The table is fixed at build
//! time; only the model identifiers behind each slot come from config.
//!
//! Rendering performs no escaping. The prompt travels as a JSON string value
//! so the request structure cannot be altered, but the remote model sees the
//! caller's text unfiltered.

use crate::config::InferenceConfig;

/// Substitution point inside a prompt template.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Template used for tasks the catalog does not know: the raw text.
pub const IDENTITY_TEMPLATE: &str = TEXT_PLACEHOLDER;

pub const DEFAULT_TASK: &str = "chat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSlot {
    Summarization,
    General,
}

struct TaskDefinition {
    id: &'static str,
    slot: ModelSlot,
    template: &'static str,
}

const TASKS: &[TaskDefinition] = &[
    TaskDefinition {
        id: "summarize",
        slot: ModelSlot::Summarization,
        template: "Summarize this clearly and briefly:\n{text}",
    },
    TaskDefinition {
        id: "chat",
        slot: ModelSlot::General,
        template: "You are a helpful assistant. Reply conversationally to:\n{text}",
    },
    TaskDefinition {
        id: "explain_code",
        slot: ModelSlot::General,
        template: "Explain what this code does in simple English:\n{text}",
    },
    TaskDefinition {
        id: "extract_points",
        slot: ModelSlot::Summarization,
        template: "Extract 3–5 key bullet points from this text:\n{text}",
    },
    TaskDefinition {
        id: "improve_text",
        slot: ModelSlot::General,
        template: "Rewrite this text with better grammar and clarity:\n{text}",
    },
];

/// Resolved (model, prompt template) pair for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub task_id: String,
    pub model_id: String,
    pub prompt_template: &'static str,
}

impl TaskSpec {
    pub fn is_identity(&self) -> bool {
        self.prompt_template == IDENTITY_TEMPLATE
    }
}

#[derive(Debug, Clone)]
pub struct TaskCatalog {
    summarization_model: String,
    general_model: String,
}

impl TaskCatalog {
    pub fn new(summarization_model: impl Into<String>, general_model: impl Into<String>) -> Self {
        Self {
            summarization_model: summarization_model.into(),
            general_model: general_model.into(),
        }
    }

    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(&config.summarization_model, &config.general_model)
    }

    /// Exact-match lookup. Unknown tasks fall back to the general model
    /// with the identity template; this never fails.
    pub fn resolve(&self, task: &str) -> TaskSpec {
        match TASKS.iter().find(|t| t.id == task) {
            Some(definition) => TaskSpec {
                task_id: definition.id.to_string(),
                model_id: self.model_for(definition.slot).to_string(),
                prompt_template: definition.template,
            },
            None => TaskSpec {
                task_id: task.to_string(),
                model_id: self.general_model.clone(),
                prompt_template: IDENTITY_TEMPLATE,
            },
        }
    }

    pub fn model_for(&self, slot: ModelSlot) -> &str {
        match slot {
            ModelSlot::Summarization => &self.summarization_model,
            ModelSlot::General => &self.general_model,
        }
    }

    /// Identifiers of every task with a dedicated template.
    pub fn task_ids() -> impl Iterator<Item = &'static str> {
        TASKS.iter().map(|t| t.id)
    }
}

/// Fill the template's single substitution point with `text`.
pub fn render(spec: &TaskSpec, text: &str) -> String {
    spec.prompt_template.replacen(TEXT_PLACEHOLDER, text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TaskCatalog {
        TaskCatalog::new("facebook/bart-large-cnn", "google/flan-t5-base")
    }

    #[test]
    fn test_resolve_known_tasks() {
        let catalog = catalog();
        let expected = [
            ("summarize", "facebook/bart-large-cnn", "Summarize this clearly and briefly:\n"),
            ("chat", "google/flan-t5-base", "You are a helpful assistant. Reply conversationally to:\n"),
            ("explain_code", "google/flan-t5-base", "Explain what this code does in simple English:\n"),
            ("extract_points", "facebook/bart-large-cnn", "Extract 3–5 key bullet points from this text:\n"),
            ("improve_text", "google/flan-t5-base", "Rewrite this text with better grammar and clarity:\n"),
        ];

        for (task, model, prefix) in expected {
            let spec = catalog.resolve(task);
            assert_eq!(spec.task_id, task);
            assert_eq!(spec.model_id, model, "model for {}", task);
            assert_eq!(render(&spec, "X"), format!("{}X", prefix), "prompt for {}", task);
            assert!(!spec.is_identity());
        }
    }

    #[test]
    fn test_unknown_task_uses_default_model_and_raw_text() {
        let catalog = catalog();
        for task in ["translate", "", "Summarize", "summarize "] {
            let spec = catalog.resolve(task);
            assert_eq!(spec.model_id, "google/flan-t5-base");
            assert!(spec.is_identity());
            assert_eq!(render(&spec, "raw input"), "raw input");
        }
    }

    #[test]
    fn test_render_is_pure_and_accepts_empty_text() {
        let spec = catalog().resolve("summarize");
        assert_eq!(render(&spec, ""), "Summarize this clearly and briefly:\n");
        assert_eq!(render(&spec, "abc"), render(&spec, "abc"));
    }

    #[test]
    fn test_render_does_not_expand_placeholder_inside_text() {
        let spec = catalog().resolve("chat");
        let prompt = render(&spec, "literal {text} here");
        assert!(prompt.ends_with("literal {text} here"));
    }

    #[test]
    fn test_task_ids_cover_table() {
        let ids: Vec<_> = TaskCatalog::task_ids().collect();
        assert_eq!(
            ids,
            vec!["summarize", "chat", "explain_code", "extract_points", "improve_text"]
        );
        assert!(ids.contains(&DEFAULT_TASK));
    }
}
