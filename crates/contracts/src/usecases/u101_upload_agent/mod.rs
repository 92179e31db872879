pub mod progress;
pub mod request;
pub mod validation;

pub use progress::{FileUploadStatus, UploadStep};
pub use request::AgentCreationPayload;
pub use validation::PackageValidationReport;

use crate::usecases::common::UseCaseMetadata;

pub struct UploadAgent;

impl UseCaseMetadata for UploadAgent {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "upload_agent"
    }

    fn display_name() -> &'static str {
        "Загрузка пакета агента"
    }

    fn description() -> &'static str {
        "Пошаговая загрузка пакета агента: файлы, проверка структуры, реквизиты, публикация"
    }
}
