use crate::shared::config::LimitsConfig;
use crate::usecases::u101_upload_agent::services::AgentFile;
use contracts::domain::a001_agent::AgentDraft;
use contracts::enums::AgentCategory;

pub const MSG_CATEGORY_REQUIRED: &str = "Please select an agent category first";
pub const MSG_NAME_REQUIRED: &str = "Agent name is required";

/// Замечание к полю черновика агента
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftIssue {
    pub field: &'static str,
    pub message: String,
    pub code: &'static str,
}

impl DraftIssue {
    fn new(field: &'static str, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            field,
            message: message.into(),
            code,
        }
    }
}

/// Выделить расширение файла, учитывая составные суффиксы (.tar.gz и т.п.)
pub fn file_extension(file_name: &str) -> String {
    let lowercase = file_name.to_lowercase();

    for compound in [".tar.gz", ".tar.xz", ".tar.bz2"] {
        if lowercase.ends_with(compound) {
            return compound.to_string();
        }
    }

    match lowercase.rfind('.') {
        Some(idx) => lowercase[idx..].to_string(),
        None => String::new(),
    }
}

/// Проверка файла перед приёмом в список загрузки: размер, категория, формат
///
/// Возвращает None если файл принят, иначе причину отказа. Побочных
/// эффектов нет; отклонённый файл в список не попадает.
pub fn validate_file(
    file: &AgentFile,
    category: Option<AgentCategory>,
    limits: &LimitsConfig,
) -> Option<String> {
    if file.size() > limits.max_file_size_bytes() {
        return Some(format!(
            "File size must be less than {}MB",
            limits.max_file_size_mb
        ));
    }

    let category = match category {
        Some(c) => c,
        None => return Some(MSG_CATEGORY_REQUIRED.to_string()),
    };

    let allowed = category.supported_formats();
    let detected = file_extension(&file.name);
    if !allowed.contains(&detected.as_str()) {
        let shown = if detected.is_empty() {
            "files without an extension"
        } else {
            detected.as_str()
        };
        return Some(format!(
            "Please upload a complete agent package. Only bundled formats are accepted: {}. \
             Individual files like {} are not sufficient for AI agents.",
            allowed.join(", "),
            shown
        ));
    }

    None
}

/// Полная проверка черновика перед отправкой
pub fn validate_draft(draft: &AgentDraft, limits: &LimitsConfig) -> Vec<DraftIssue> {
    let mut issues = Vec::new();

    // Лимиты считаются в символах, не в байтах UTF-8
    let name = draft.name.trim();
    let name_chars = name.chars().count();
    if name.is_empty() {
        issues.push(DraftIssue::new("name", MSG_NAME_REQUIRED, "REQUIRED_FIELD"));
    } else if name_chars < limits.min_name_len {
        issues.push(DraftIssue::new(
            "name",
            format!(
                "Agent name must be at least {} characters long",
                limits.min_name_len
            ),
            "MIN_LENGTH",
        ));
    } else if name_chars > limits.max_name_len {
        issues.push(DraftIssue::new(
            "name",
            format!("Agent name must not exceed {} characters", limits.max_name_len),
            "MAX_LENGTH",
        ));
    }

    if draft.category.is_none() {
        issues.push(DraftIssue::new(
            "category",
            MSG_CATEGORY_REQUIRED,
            "REQUIRED_FIELD",
        ));
    }

    if draft.description.chars().count() > limits.max_description_len {
        issues.push(DraftIssue::new(
            "description",
            format!(
                "Description must not exceed {} characters",
                limits.max_description_len
            ),
            "MAX_LENGTH",
        ));
    }

    if let Some(link) = draft.github_link.as_deref() {
        if let Some(message) = validate_github_url(link) {
            issues.push(DraftIssue::new("github_link", message, "INVALID_URL"));
        }
    }

    if draft.tags.len() > limits.max_tags {
        issues.push(DraftIssue::new(
            "tags",
            format!("Maximum {} tags allowed", limits.max_tags),
            "MAX_ITEMS",
        ));
    }

    issues
}

/// Проверка ссылки на GitHub: https, домен github.com, путь owner/repo
pub fn validate_github_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None; // Поле опциональное
    }

    let rest = match url.strip_prefix("https://") {
        Some(rest) => rest,
        None => return Some("GitHub URL must use HTTPS protocol".to_string()),
    };

    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, path),
        None => (rest, ""),
    };

    if !host.contains("github.com") {
        return Some("URL must be a valid GitHub repository".to_string());
    }

    let segments = path.split('/').filter(|s| !s.is_empty()).count();
    if segments < 2 {
        return Some("GitHub URL must include both username and repository name".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    fn file(name: &str, size: usize) -> AgentFile {
        AgentFile::new(name, vec![0u8; size])
    }

    #[test]
    fn test_extension_handles_compound_suffixes() {
        assert_eq!(file_extension("agent.tar.gz"), ".tar.gz");
        assert_eq!(file_extension("AGENT.TAR.BZ2"), ".tar.bz2");
        assert_eq!(file_extension("bundle.ZIP"), ".zip");
        assert_eq!(file_extension("noext"), "");
    }

    #[test]
    fn test_rejects_oversized_file() {
        let mut limits = limits();
        limits.max_file_size_mb = 1;
        let big = file("agent.zip", 1024 * 1024 + 1);
        let reason = validate_file(&big, Some(AgentCategory::WebBased), &limits);
        assert_eq!(reason.as_deref(), Some("File size must be less than 1MB"));
    }

    #[test]
    fn test_rejects_when_category_not_selected() {
        let reason = validate_file(&file("agent.zip", 16), None, &limits());
        assert_eq!(reason.as_deref(), Some(MSG_CATEGORY_REQUIRED));
    }

    #[test]
    fn test_rejects_loose_source_file() {
        let reason = validate_file(&file("script.txt", 16), Some(AgentCategory::WebBased), &limits());
        let reason = reason.expect("txt must be rejected");
        assert!(reason.contains(".txt"));
        assert!(reason.contains(".zip"));
    }

    #[test]
    fn test_accepts_archive_for_category() {
        assert!(validate_file(&file("agent.zip", 16), Some(AgentCategory::WebBased), &limits()).is_none());
        assert!(validate_file(&file("agent.tar.gz", 16), Some(AgentCategory::DataAnalyst), &limits()).is_none());
        // .rar допустим только для local-opensource
        assert!(validate_file(&file("agent.rar", 16), Some(AgentCategory::LocalOpensource), &limits()).is_none());
        assert!(validate_file(&file("agent.rar", 16), Some(AgentCategory::WebBased), &limits()).is_some());
    }

    #[test]
    fn test_draft_validation_reports_field_issues() {
        let mut draft = AgentDraft::default();
        draft.name = "ab".to_string();
        draft.github_link = Some("http://github.com/user/repo".to_string());

        let issues = validate_draft(&draft, &limits());
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"category"));
        assert!(fields.contains(&"github_link"));
    }

    #[test]
    fn test_name_limits_count_characters_not_bytes() {
        let mut draft = AgentDraft::default();
        draft.category = Some(AgentCategory::WebBased);

        // 60 кириллических символов = 120 байт, лимит в 100 символов не превышен
        draft.name = "а".repeat(60);
        assert!(validate_draft(&draft, &limits()).is_empty());

        // 2 многобайтовых символа не проходят минимум в 3 символа
        draft.name = "аб".to_string();
        let issues = validate_draft(&draft, &limits());
        assert!(issues.iter().any(|i| i.code == "MIN_LENGTH"));

        draft.name = "агент".to_string();
        draft.description = "о".repeat(1000);
        assert!(validate_draft(&draft, &limits()).is_empty());
        draft.description = "о".repeat(1001);
        let issues = validate_draft(&draft, &limits());
        assert!(issues.iter().any(|i| i.field == "description"));
    }

    #[test]
    fn test_valid_draft_has_no_issues() {
        let mut draft = AgentDraft::default();
        draft.name = "TestAgent".to_string();
        draft.category = Some(AgentCategory::WebBased);
        draft.github_link = Some("https://github.com/user/repo".to_string());
        assert!(validate_draft(&draft, &limits()).is_empty());
    }

    #[test]
    fn test_github_url_rules() {
        assert!(validate_github_url("").is_none());
        assert!(validate_github_url("https://github.com/user/repo").is_none());
        assert!(validate_github_url("http://github.com/user/repo").is_some());
        assert!(validate_github_url("https://gitlab.com/user/repo").is_some());
        assert!(validate_github_url("https://github.com/user").is_some());
    }
}
