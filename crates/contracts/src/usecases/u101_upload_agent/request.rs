use crate::enums::{AgentCategory, AgentVisibility};
use crate::usecases::u101_upload_agent::validation::PackageValidationReport;
use serde::{Deserialize, Serialize};

/// Запрос на создание агента по завершении мастера загрузки
///
/// `file_refs` — идентификаторы уже загруженных в хранилище файлов,
/// `validation_results` — отчёт анализа для каждого файла в том же порядке.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCreationPayload {
    pub name: String,
    pub description: String,
    pub visibility: AgentVisibility,
    pub agent_type: String,
    pub category: AgentCategory,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    pub file_refs: Vec<String>,
    pub is_active: bool,
    pub copyright_confirmed: bool,
    pub validation_results: Vec<Option<PackageValidationReport>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_with_wire_field_names() {
        let payload = AgentCreationPayload {
            name: "TestAgent".to_string(),
            description: String::new(),
            visibility: AgentVisibility::Private,
            agent_type: String::new(),
            category: AgentCategory::WebBased,
            tags: vec!["nlp".to_string()],
            github_link: None,
            file_refs: vec!["file-1".to_string()],
            is_active: true,
            copyright_confirmed: true,
            validation_results: vec![None],
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["visibility"], "private");
        assert_eq!(json["category"], "web-based");
        assert_eq!(json["file_refs"][0], "file-1");
        assert_eq!(json["copyright_confirmed"], true);
        // github_link отсутствует, если не задан
        assert!(json.get("github_link").is_none());
    }
}
