// Text-generation dispatch: task catalog, inference client, dispatcher

pub mod catalog;
pub mod dispatch;
pub mod huggingface;
pub mod provider;

pub use catalog::{render, ModelSlot, TaskCatalog, TaskSpec};
pub use dispatch::{Dispatcher, Generation, GenerationRequest};
pub use huggingface::{extract_generated_text, InferenceClient, InferenceError};
pub use provider::{InferenceTransport, ReqwestTransport, TransportError, TransportResponse};
