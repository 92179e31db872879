use serde::{Deserialize, Serialize};

/// Категории агентов маркетплейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentCategory {
    WebBased,
    LocalOpensource,
    Customgpt,
    Conversational,
    DocumentProcessor,
    CodeAssistant,
    ContentCreator,
    DataAnalyst,
    Automation,
    Other,
}

impl AgentCategory {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            AgentCategory::WebBased => "web-based",
            AgentCategory::LocalOpensource => "local-opensource",
            AgentCategory::Customgpt => "customgpt",
            AgentCategory::Conversational => "conversational",
            AgentCategory::DocumentProcessor => "document-processor",
            AgentCategory::CodeAssistant => "code-assistant",
            AgentCategory::ContentCreator => "content-creator",
            AgentCategory::DataAnalyst => "data-analyst",
            AgentCategory::Automation => "automation",
            AgentCategory::Other => "other",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentCategory::WebBased => "Web-Based Platform Agent",
            AgentCategory::LocalOpensource => "Local/Open-Source Agent",
            AgentCategory::Customgpt => "CustomGPT-style Agent",
            AgentCategory::Conversational => "Conversational AI",
            AgentCategory::DocumentProcessor => "Document Processor",
            AgentCategory::CodeAssistant => "Code Assistant",
            AgentCategory::ContentCreator => "Content Creator",
            AgentCategory::DataAnalyst => "Data Analyst",
            AgentCategory::Automation => "Automation Agent",
            AgentCategory::Other => "Other",
        }
    }

    /// Описание категории для UI
    pub fn description(&self) -> &'static str {
        match self {
            AgentCategory::WebBased => "Cloud-hosted agents accessible via web dashboard",
            AgentCategory::LocalOpensource => {
                "Downloadable scripts, containers, or packages for local execution"
            }
            AgentCategory::Customgpt => "GPT-based agents with custom training data and prompts",
            AgentCategory::Conversational => "Chat bots and interactive dialogue systems",
            AgentCategory::DocumentProcessor => "PDF, text, and document analysis agents",
            AgentCategory::CodeAssistant => "Programming and development helper agents",
            AgentCategory::ContentCreator => {
                "Writing, design, and creative content generation agents"
            }
            AgentCategory::DataAnalyst => "Data processing, analysis, and visualization agents",
            AgentCategory::Automation => "Task automation and workflow orchestration agents",
            AgentCategory::Other => {
                "Custom or specialized agent types not covered by standard categories"
            }
        }
    }

    /// Допустимые форматы пакета для категории
    ///
    /// Агент принимается только как архив целиком; одиночные файлы
    /// отклоняются валидатором.
    pub fn supported_formats(&self) -> &'static [&'static str] {
        match self {
            AgentCategory::LocalOpensource => {
                &[".zip", ".tar.gz", ".tar.xz", ".tar.bz2", ".7z", ".rar"]
            }
            AgentCategory::Other => &[".zip", ".tar.gz", ".tar.xz", ".tar.bz2", ".7z"],
            _ => &[".zip", ".tar.gz", ".tar.xz", ".tar.bz2"],
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<AgentCategory> {
        vec![
            AgentCategory::WebBased,
            AgentCategory::LocalOpensource,
            AgentCategory::Customgpt,
            AgentCategory::Conversational,
            AgentCategory::DocumentProcessor,
            AgentCategory::CodeAssistant,
            AgentCategory::ContentCreator,
            AgentCategory::DataAnalyst,
            AgentCategory::Automation,
            AgentCategory::Other,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for AgentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for category in AgentCategory::all() {
            assert_eq!(AgentCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(AgentCategory::from_code("unknown"), None);
    }

    #[test]
    fn test_serde_uses_kebab_case_codes() {
        let json = serde_json::to_string(&AgentCategory::WebBased).unwrap();
        assert_eq!(json, "\"web-based\"");
        let parsed: AgentCategory = serde_json::from_str("\"document-processor\"").unwrap();
        assert_eq!(parsed, AgentCategory::DocumentProcessor);
    }

    #[test]
    fn test_every_category_accepts_zip() {
        for category in AgentCategory::all() {
            assert!(category.supported_formats().contains(&".zip"));
        }
    }
}
