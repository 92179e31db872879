pub mod aggregate;

pub use aggregate::{AgentDraft, AgentId};
