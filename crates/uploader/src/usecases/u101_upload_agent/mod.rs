pub mod executor;
pub mod inspector;
pub mod services;
pub mod validator;

pub use executor::{UploadExecutor, UploadItem, WorkflowState};
pub use services::{AgentFile, AgentRegistry, FileStorage, ProgressSink, ServiceError};
