use crate::usecases::u101_upload_agent::services::AgentFile;
use contracts::usecases::u101_upload_agent::PackageValidationReport;
use std::io::Cursor;
use zip::ZipArchive;

const MAIN_FILE_INDICATORS: &[&str] = &["main", "app", "index", "start", "run"];

const DEPENDENCY_FILE_PATTERNS: &[&str] = &[
    "requirements.txt",
    "package.json",
    "pyproject.toml",
    "environment.yml",
    "pipfile",
];

const CONFIG_FILE_PATTERNS: &[&str] = &["config", ".env", "settings", ".toml", ".yaml", ".yml"];

/// Инспекция содержимого пакета агента
///
/// Открывает ZIP архив в памяти, перечисляет записи и определяет,
/// насколько пакет полон: точка входа, зависимости, README, конфигурация.
/// Никогда не возвращает ошибку наружу — проблемы анализа попадают
/// в `errors` отчёта.
pub fn inspect_package(file: &AgentFile) -> PackageValidationReport {
    if !file.name.to_lowercase().ends_with(".zip") {
        return PackageValidationReport::failed(vec![
            "Only ZIP files are currently supported for package analysis".to_string(),
        ]);
    }

    let mut archive = match ZipArchive::new(Cursor::new(file.data.as_slice())) {
        Ok(archive) => archive,
        Err(err) => {
            tracing::warn!("ZIP analysis failed for {}: {}", file.name, err);
            return PackageValidationReport::failed(vec![
                "Failed to analyze package structure. Please ensure it's a valid ZIP file."
                    .to_string(),
            ]);
        }
    };

    // Каталоги с суффиксом "/", файлы как есть
    let mut entry_paths: Vec<String> = Vec::with_capacity(archive.len());
    let mut file_paths: Vec<String> = Vec::new();

    for i in 0..archive.len() {
        let entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("ZIP entry {} unreadable in {}: {}", i, file.name, err);
                return PackageValidationReport::failed(vec![
                    "Failed to analyze package structure. Please ensure it's a valid ZIP file."
                        .to_string(),
                ]);
            }
        };

        let name = entry.name().to_string();
        if entry.is_dir() {
            if name.ends_with('/') {
                entry_paths.push(name);
            } else {
                entry_paths.push(format!("{}/", name));
            }
        } else {
            entry_paths.push(name.clone());
            file_paths.push(name);
        }
    }

    let mut report = analyze_structure(&file_paths);
    entry_paths.sort();
    report.package_structure = entry_paths;

    tracing::debug!(
        package = %file.name,
        main = report.has_main_file,
        dependencies = report.has_dependencies,
        readme = report.has_readme,
        config = report.has_config,
        warnings = report.warnings.len(),
        errors = report.errors.len(),
        "package inspected"
    );

    report
}

/// Классификация по списку файловых записей (без каталогов)
fn analyze_structure(files: &[String]) -> PackageValidationReport {
    let lowered: Vec<String> = files.iter().map(|f| f.to_lowercase()).collect();

    let has_main_file = lowered
        .iter()
        .any(|f| MAIN_FILE_INDICATORS.iter().any(|ind| f.contains(ind)));

    let has_dependencies = lowered
        .iter()
        .any(|f| DEPENDENCY_FILE_PATTERNS.iter().any(|pat| f.contains(pat)));

    let has_readme = lowered.iter().any(|f| f.contains("readme"));

    let has_config = lowered
        .iter()
        .any(|f| CONFIG_FILE_PATTERNS.iter().any(|pat| f.contains(pat)));

    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if !has_main_file {
        warnings.push("No main entry point file detected (main.py, app.py, index.py, etc.)".to_string());
    }
    if !has_dependencies {
        warnings.push(
            "No dependencies file found (requirements.txt, package.json, pyproject.toml, etc.)"
                .to_string(),
        );
    }
    if !has_readme {
        warnings.push("No README file found - documentation is highly recommended".to_string());
    }
    if !has_config {
        warnings.push(
            "No configuration files detected - consider adding config files for better deployment"
                .to_string(),
        );
    }

    if files.is_empty() {
        errors.push("Package appears to be empty".to_string());
    } else if files.len() == 1 && files[0].ends_with(".py") {
        errors.push(
            "Package contains only a single Python file. Please package your agent properly \
             with all dependencies."
                .to_string(),
        );
    }

    if !lowered.iter().any(|f| f.ends_with(".py")) {
        warnings.push("No Python files detected - make sure this is a Python-based agent".to_string());
    }

    PackageValidationReport {
        has_main_file,
        has_dependencies,
        has_readme,
        has_config,
        package_structure: Vec::new(),
        warnings,
        errors,
    }
}
