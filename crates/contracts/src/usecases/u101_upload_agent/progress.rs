use serde::{Deserialize, Serialize};

/// Статус файла в конвейере загрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileUploadStatus {
    /// Файл выбран, загрузка не началась
    Pending,

    /// Файл загружается в хранилище
    Uploading,

    /// Загрузка завершена
    Uploaded,

    /// Идёт анализ содержимого пакета
    Validating,

    /// Анализ завершён без критических ошибок
    Validated,

    /// Ошибка загрузки или анализа
    Error,
}

/// Шаги мастера загрузки агента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStep {
    Upload,
    Validate,
    Details,
    Review,
}

impl UploadStep {
    pub fn index(&self) -> usize {
        match self {
            UploadStep::Upload => 0,
            UploadStep::Validate => 1,
            UploadStep::Details => 2,
            UploadStep::Review => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadStep::Upload => "Upload Files",
            UploadStep::Validate => "Validate Package",
            UploadStep::Details => "Agent Details",
            UploadStep::Review => "Review & Submit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UploadStep::Upload => "Upload your agent package files",
            UploadStep::Validate => "Verify package structure and content",
            UploadStep::Details => "Enter agent information and configuration",
            UploadStep::Review => "Review all details and submit for creation",
        }
    }

    /// Следующий шаг; с последнего шага движения вперёд нет
    pub fn next(&self) -> UploadStep {
        match self {
            UploadStep::Upload => UploadStep::Validate,
            UploadStep::Validate => UploadStep::Details,
            UploadStep::Details => UploadStep::Review,
            UploadStep::Review => UploadStep::Review,
        }
    }

    /// Предыдущий шаг; с первого шага движения назад нет
    pub fn back(&self) -> UploadStep {
        match self {
            UploadStep::Upload => UploadStep::Upload,
            UploadStep::Validate => UploadStep::Upload,
            UploadStep::Details => UploadStep::Validate,
            UploadStep::Review => UploadStep::Details,
        }
    }

    pub fn all() -> Vec<UploadStep> {
        vec![
            UploadStep::Upload,
            UploadStep::Validate,
            UploadStep::Details,
            UploadStep::Review,
        ]
    }
}
