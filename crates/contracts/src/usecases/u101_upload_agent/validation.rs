use serde::{Deserialize, Serialize};

/// Отчёт об анализе содержимого пакета агента
///
/// Строится один раз по списку записей архива и дальше не меняется.
/// Критические ошибки лежат в `errors`; `warnings` не блокируют отправку.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageValidationReport {
    /// Найдена ли точка входа (main.py, app.py, index.js и т.п.)
    pub has_main_file: bool,

    /// Найден ли файл зависимостей (requirements.txt, package.json и т.п.)
    pub has_dependencies: bool,

    /// Найден ли README
    pub has_readme: bool,

    /// Найдены ли конфигурационные файлы
    pub has_config: bool,

    /// Полный отсортированный список записей архива (каталоги с суффиксом "/")
    pub package_structure: Vec<String>,

    /// Предупреждения о рекомендуемых, но отсутствующих файлах
    pub warnings: Vec<String>,

    /// Критические ошибки, блокирующие создание агента
    pub errors: Vec<String>,
}

impl PackageValidationReport {
    /// Отчёт для пакета, который не удалось проанализировать
    pub fn failed(errors: Vec<String>) -> Self {
        Self {
            errors,
            ..Default::default()
        }
    }

    /// Пакет пригоден к развёртыванию: есть точка входа, зависимости
    /// и ни одной критической ошибки
    pub fn is_deployable(&self) -> bool {
        self.has_main_file && self.has_dependencies && self.errors.is_empty()
    }
}
