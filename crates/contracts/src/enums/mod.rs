pub mod agent_category;
pub mod agent_visibility;

pub use agent_category::AgentCategory;
pub use agent_visibility::AgentVisibility;
