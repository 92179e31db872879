use crate::enums::{AgentCategory, AgentVisibility};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для агрегата Agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub Uuid);

impl AgentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AgentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Черновик агента, заполняемый по шагам мастера загрузки
///
/// Мутируется полевыми сеттерами исполнителя и превращается в
/// `AgentCreationPayload` при финальной отправке.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDraft {
    /// Уникальное имя агента
    pub name: String,

    /// Описание возможностей
    pub description: String,

    /// Видимость (private по умолчанию)
    pub visibility: AgentVisibility,

    /// Произвольная классификация типа
    pub agent_type: String,

    /// Категория; не выбрана при создании черновика
    pub category: Option<AgentCategory>,

    /// Теги для поиска (уникальные, порядок добавления сохраняется)
    pub tags: Vec<String>,

    /// Ссылка на GitHub репозиторий (опционально)
    pub github_link: Option<String>,

    /// Активен ли агент после создания
    pub is_active: bool,
}

impl Default for AgentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            visibility: AgentVisibility::Private,
            agent_type: String::new(),
            category: None,
            tags: Vec::new(),
            github_link: None,
            is_active: true,
        }
    }
}

impl AgentDraft {
    /// Добавить тег: trim + lowercase, без дублей, с ограничением количества
    ///
    /// Возвращает true если тег реально добавлен.
    pub fn add_tag(&mut self, tag: &str, max_tags: usize) -> bool {
        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty()
            || self.tags.contains(&normalized)
            || self.tags.len() >= max_tags
        {
            return false;
        }
        self.tags.push(normalized);
        true
    }

    /// Удалить тег по значению
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}
