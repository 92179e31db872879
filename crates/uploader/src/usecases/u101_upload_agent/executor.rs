use crate::shared::config::LimitsConfig;
use crate::usecases::u101_upload_agent::inspector::inspect_package;
use crate::usecases::u101_upload_agent::services::{
    AgentFile, AgentRegistry, FileStorage, ProgressSink, ServiceError,
};
use crate::usecases::u101_upload_agent::validator::{
    validate_draft, validate_file, MSG_CATEGORY_REQUIRED, MSG_NAME_REQUIRED,
};
use chrono::{DateTime, Utc};
use contracts::enums::{AgentCategory, AgentVisibility};
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u101_upload_agent::{
    AgentCreationPayload, FileUploadStatus, PackageValidationReport, UploadStep,
};
use contracts::domain::a001_agent::AgentDraft;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

pub const MSG_COPYRIGHT_REQUIRED: &str =
    "Please confirm that your agent is open-source or self-developed";
pub const MSG_FILES_REQUIRED: &str = "Please upload at least one file for your agent";
pub const MSG_UPLOADS_INCOMPLETE: &str = "Please wait for all files to finish uploading";
pub const MSG_VALIDATION_STEPS_INCOMPLETE: &str = "Please complete all validation steps first";
pub const MSG_AGENT_CREATED: &str = "Agent created successfully!";

/// Файл в списке загрузки и его текущее состояние
#[derive(Debug, Clone)]
pub struct UploadItem {
    pub file: AgentFile,
    /// Прогресс загрузки в хранилище, 0..=100
    pub progress: u8,
    pub status: FileUploadStatus,
    /// Ошибка загрузки или анализа этого файла
    pub error: Option<String>,
    /// Идентификатор в хранилище после успешной загрузки
    pub file_id: Option<String>,
    /// Отчёт анализа пакета
    pub validation: Option<PackageValidationReport>,
}

impl UploadItem {
    fn new(file: AgentFile) -> Self {
        Self {
            file,
            progress: 0,
            status: FileUploadStatus::Pending,
            error: None,
            file_id: None,
            validation: None,
        }
    }
}

/// Единый снимок состояния мастера загрузки
///
/// Все мутации проходят через именованные действия `UploadExecutor`,
/// поэтому шаг, черновик и статусы файлов всегда согласованы между собой.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub step: UploadStep,
    pub draft: AgentDraft,
    pub items: Vec<UploadItem>,
    pub copyright_confirmed: bool,
    /// Блокировка повторной отправки на время вызова реестра
    pub submitting: bool,
    /// Ошибка уровня шага; сбрасывается при правках и возврате назад
    pub error: Option<String>,
    pub success: Option<String>,
    /// Общий прогресс шага проверки, 0..=100
    pub validation_progress: u8,
    pub upload_started_at: Option<DateTime<Utc>>,
    pub validation_started_at: Option<DateTime<Utc>>,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            step: UploadStep::Upload,
            draft: AgentDraft::default(),
            items: Vec::new(),
            copyright_confirmed: false,
            submitting: false,
            error: None,
            success: None,
            validation_progress: 0,
            upload_started_at: None,
            validation_started_at: None,
        }
    }
}

/// Executor мастера загрузки агента
///
/// Сервисы хранилища и реестра передаются явно, что позволяет подменять
/// их фейками в тестах. Все асинхронные операции выполняются строго
/// по одному файлу за раз.
pub struct UploadExecutor {
    storage: Arc<dyn FileStorage>,
    registry: Arc<dyn AgentRegistry>,
    limits: LimitsConfig,
    state: WorkflowState,
}

impl UploadExecutor {
    pub fn new(
        storage: Arc<dyn FileStorage>,
        registry: Arc<dyn AgentRegistry>,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            storage,
            registry,
            limits,
            state: WorkflowState::default(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    // ----- работа с файлами -----

    /// Принять выбранные файлы и последовательно загрузить их в хранилище
    ///
    /// Любой отказ валидатора блокирует весь выбор: список не меняется,
    /// причина отказа попадает в ошибку шага. Ошибка загрузки отдельного
    /// файла помечает только его и не мешает остальным.
    pub async fn select_files(&mut self, files: Vec<AgentFile>) {
        if files.is_empty() {
            return;
        }

        for file in &files {
            if let Some(reason) = validate_file(file, self.state.draft.category, &self.limits) {
                tracing::info!(file = %file.name, %reason, "file rejected");
                self.state.error = Some(reason);
                return;
            }
        }

        self.state.error = None;
        if self.state.upload_started_at.is_none() {
            self.state.upload_started_at = Some(Utc::now());
        }

        let first_new = self.state.items.len();
        self.state
            .items
            .extend(files.into_iter().map(UploadItem::new));

        for index in first_new..self.state.items.len() {
            self.upload_item(index).await;
        }
    }

    async fn upload_item(&mut self, index: usize) {
        self.state.items[index].status = FileUploadStatus::Uploading;

        let observed = Arc::new(AtomicU8::new(0));
        let sink: ProgressSink = {
            let observed = Arc::clone(&observed);
            Arc::new(move |pct| observed.store(pct.min(100), Ordering::Relaxed))
        };

        let storage = Arc::clone(&self.storage);
        let result = storage.upload(&self.state.items[index].file, sink).await;

        let item = &mut self.state.items[index];
        item.progress = observed.load(Ordering::Relaxed);
        match result {
            Ok(file_id) => {
                item.progress = 100;
                item.status = FileUploadStatus::Uploaded;
                item.file_id = Some(file_id);
            }
            Err(err) => {
                tracing::warn!(file = %item.file.name, error = %err, "file upload failed");
                item.status = FileUploadStatus::Error;
                item.error = Some(err.user_message());
            }
        }
    }

    /// Убрать файл из списка; без файлов мастер возвращается на первый шаг
    pub fn remove_file(&mut self, index: usize) {
        if index >= self.state.items.len() {
            return;
        }
        self.state.items.remove(index);
        if self.state.items.is_empty() {
            self.state.step = UploadStep::Upload;
        }
    }

    // ----- поля черновика -----

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.draft.name = name.into();
        self.state.error = None;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.draft.description = description.into();
        self.state.error = None;
    }

    pub fn set_agent_type(&mut self, agent_type: impl Into<String>) {
        self.state.draft.agent_type = agent_type.into();
        self.state.error = None;
    }

    pub fn set_visibility(&mut self, visibility: AgentVisibility) {
        self.state.draft.visibility = visibility;
        self.state.error = None;
    }

    pub fn set_category(&mut self, category: AgentCategory) {
        self.state.draft.category = Some(category);
        self.state.error = None;
    }

    pub fn set_github_link(&mut self, link: impl Into<String>) {
        let link = link.into();
        self.state.draft.github_link = if link.trim().is_empty() {
            None
        } else {
            Some(link)
        };
        self.state.error = None;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.state.draft.is_active = is_active;
    }

    pub fn set_copyright(&mut self, confirmed: bool) {
        self.state.copyright_confirmed = confirmed;
        self.state.error = None;
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.state.draft.add_tag(tag, self.limits.max_tags)
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.state.draft.remove_tag(tag);
    }

    // ----- предикаты переходов (чистые, идемпотентные) -----

    /// С шага Upload на Validate: файлы есть, все загружены,
    /// категория выбрана, авторство подтверждено
    ///
    /// Производный от `upload_gate_failure`, чтобы предикат и сообщения
    /// шага не расходились.
    pub fn can_proceed_to_validation(&self) -> bool {
        self.upload_gate_failure().is_none()
    }

    /// С шага Validate на Details: все файлы проверены и хотя бы один
    /// пакет пригоден к развёртыванию
    pub fn can_proceed_to_agent_details(&self) -> bool {
        if self.state.items.is_empty() {
            return false;
        }

        let all_validated = self
            .state
            .items
            .iter()
            .all(|i| i.status == FileUploadStatus::Validated);
        if !all_validated {
            return false;
        }

        self.state
            .items
            .iter()
            .any(|i| i.validation.as_ref().is_some_and(|r| r.is_deployable()))
    }

    /// Финальная отправка доступна: нет отправки в полёте, авторство
    /// подтверждено, все файлы проверены, имя и категория заполнены
    pub fn can_submit(&self) -> bool {
        !self.state.submitting
            && self.state.copyright_confirmed
            && !self.state.items.is_empty()
            && self
                .state
                .items
                .iter()
                .all(|i| i.status == FileUploadStatus::Validated)
            && !self.state.draft.name.trim().is_empty()
            && self.state.draft.category.is_some()
    }

    // ----- навигация -----

    /// Шаг вперёд; с шага Upload запускает последовательную проверку пакетов
    pub async fn advance(&mut self) {
        match self.state.step {
            UploadStep::Upload => {
                if let Some(message) = self.upload_gate_failure() {
                    self.state.error = Some(message.to_string());
                    return;
                }
                self.state.error = None;
                self.state.step = UploadStep::Validate;
                self.run_validation();
            }
            UploadStep::Validate => {
                if self.can_proceed_to_agent_details() {
                    self.state.error = None;
                    self.state.step = UploadStep::Details;
                } else {
                    self.state.error = Some(MSG_VALIDATION_STEPS_INCOMPLETE.to_string());
                }
            }
            UploadStep::Details => {
                if self.state.draft.name.trim().is_empty() {
                    self.state.error = Some(MSG_NAME_REQUIRED.to_string());
                } else {
                    self.state.error = None;
                    self.state.step = UploadStep::Review;
                }
            }
            UploadStep::Review => {}
        }
    }

    fn upload_gate_failure(&self) -> Option<&'static str> {
        if !self.state.copyright_confirmed {
            return Some(MSG_COPYRIGHT_REQUIRED);
        }
        if self.state.items.is_empty() {
            return Some(MSG_FILES_REQUIRED);
        }
        if self.state.draft.category.is_none() {
            return Some(MSG_CATEGORY_REQUIRED);
        }
        if self
            .state
            .items
            .iter()
            .any(|i| i.status != FileUploadStatus::Uploaded)
        {
            return Some(MSG_UPLOADS_INCOMPLETE);
        }
        None
    }

    /// Последовательная проверка содержимого каждого файла
    ///
    /// Ошибка анализа одного файла помечает его `error`, но не прерывает
    /// проверку остальных. В памяти одновременно разбирается один архив.
    fn run_validation(&mut self) {
        self.state.validation_started_at = Some(Utc::now());
        self.state.validation_progress = 0;

        let total = self.state.items.len();
        for index in 0..total {
            self.state.items[index].status = FileUploadStatus::Validating;

            let report = inspect_package(&self.state.items[index].file);

            let item = &mut self.state.items[index];
            if report.errors.is_empty() {
                item.status = FileUploadStatus::Validated;
                item.error = None;
            } else {
                item.status = FileUploadStatus::Error;
                item.error = Some(report.errors.join(", "));
            }
            item.validation = Some(report);

            self.state.validation_progress = ((index + 1) * 100 / total) as u8;
        }

        if let Some(started) = self.state.validation_started_at {
            tracing::info!(
                files = total,
                duration_ms = (Utc::now() - started).num_milliseconds(),
                "package validation finished"
            );
        }
    }

    /// Шаг назад; сбрасывает ошибку текущего шага
    pub fn back(&mut self) {
        self.state.step = self.state.step.back();
        self.state.error = None;
    }

    /// Полный сброс мастера (закрытие/отмена)
    pub fn reset(&mut self) {
        self.state = WorkflowState::default();
    }

    // ----- отправка -----

    /// Создать агента из собранного состояния
    ///
    /// Защищено `can_submit`; на время вызова реестра держится блокировка
    /// `submitting`. Классы отказов реестра дают различимые сообщения.
    pub async fn submit(&mut self) -> UseCaseResult<()> {
        if !self.can_submit() {
            return Err(UseCaseError::validation(
                "Submission requirements are not met",
            ));
        }

        self.state.submitting = true;
        self.state.error = None;
        self.state.success = None;

        let issues = validate_draft(&self.state.draft, &self.limits);
        if let Some(issue) = issues.first() {
            self.state.submitting = false;
            self.state.error = Some(issue.message.clone());
            return Err(UseCaseError::validation(issue.message.clone())
                .with_details(format!("field: {}", issue.field)));
        }

        // Категория гарантирована предикатом can_submit
        let category = match self.state.draft.category {
            Some(category) => category,
            None => {
                self.state.submitting = false;
                return Err(UseCaseError::validation(MSG_CATEGORY_REQUIRED));
            }
        };

        let payload = AgentCreationPayload {
            name: self.state.draft.name.trim().to_string(),
            description: self.state.draft.description.trim().to_string(),
            visibility: self.state.draft.visibility,
            agent_type: self.state.draft.agent_type.trim().to_string(),
            category,
            tags: self.state.draft.tags.clone(),
            github_link: self
                .state
                .draft
                .github_link
                .as_ref()
                .map(|l| l.trim().to_string()),
            file_refs: self
                .state
                .items
                .iter()
                .filter_map(|i| i.file_id.clone())
                .collect(),
            is_active: self.state.draft.is_active,
            copyright_confirmed: self.state.copyright_confirmed,
            validation_results: self
                .state
                .items
                .iter()
                .map(|i| i.validation.clone())
                .collect(),
        };

        tracing::info!(
            name = %payload.name,
            category = %payload.category,
            files = payload.file_refs.len(),
            "creating agent"
        );

        let registry = Arc::clone(&self.registry);
        let result = registry.create(payload).await;
        self.state.submitting = false;

        match result {
            Ok(()) => {
                if let Some(started) = self.state.upload_started_at {
                    tracing::info!(
                        total_ms = (Utc::now() - started).num_milliseconds(),
                        "agent created"
                    );
                }
                self.state.success = Some(MSG_AGENT_CREATED.to_string());
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "agent creation failed");
                let message = err.user_message();
                self.state.error = Some(message.clone());
                Err(match err {
                    ServiceError::AuthenticationExpired => UseCaseError::authentication(message),
                    ServiceError::ValidationRejected(_) => UseCaseError::validation(message),
                    ServiceError::Network(_) => UseCaseError::network(message),
                    ServiceError::Internal(_) => UseCaseError::creation(message),
                })
            }
        }
    }
}
