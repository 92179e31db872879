use serde::{Deserialize, Serialize};

/// Видимость агента в маркетплейсе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentVisibility {
    /// Виден только владельцу
    #[default]
    Private,

    /// Опубликован в каталоге
    Public,
}

impl AgentVisibility {
    pub fn code(&self) -> &'static str {
        match self {
            AgentVisibility::Private => "private",
            AgentVisibility::Public => "public",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "private" => Some(AgentVisibility::Private),
            "public" => Some(AgentVisibility::Public),
            _ => None,
        }
    }
}
