use async_trait::async_trait;
use contracts::usecases::u101_upload_agent::AgentCreationPayload;
use std::sync::Arc;
use thiserror::Error;

/// Файл пакета агента, целиком загруженный в память
///
/// Анализ архива работает по байтам в памяти; одновременно инспектируется
/// не более одного файла, так что пик потребления ограничен размером
/// самого большого пакета.
#[derive(Debug, Clone)]
pub struct AgentFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl AgentFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Callback прогресса загрузки файла, 0..=100
pub type ProgressSink = Arc<dyn Fn(u8) + Send + Sync>;

/// Ошибка внешнего сервиса (хранилище файлов, реестр агентов)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("authentication expired")]
    AuthenticationExpired,

    #[error("payload rejected: {0}")]
    ValidationRejected(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Текст для пользователя; различает классы отказов из §7
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::AuthenticationExpired => {
                "Session expired. Please log in again.".to_string()
            }
            ServiceError::ValidationRejected(detail) => {
                format!("Validation Error: {}", detail)
            }
            ServiceError::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            ServiceError::Internal(message) if !message.is_empty() => message.clone(),
            ServiceError::Internal(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}

/// Хранилище файлов пакетов
///
/// Вызывается один раз на каждый принятый файл, до финальной отправки.
/// Возвращает идентификатор файла в хранилище.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn upload(&self, file: &AgentFile, progress: ProgressSink)
        -> Result<String, ServiceError>;
}

/// Реестр агентов маркетплейса
#[async_trait]
pub trait AgentRegistry: Send + Sync {
    async fn create(&self, payload: AgentCreationPayload) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_distinguish_failure_classes() {
        assert!(ServiceError::AuthenticationExpired
            .user_message()
            .contains("Session expired"));
        assert!(ServiceError::ValidationRejected("name taken".into())
            .user_message()
            .contains("name taken"));
        assert!(ServiceError::Network("timeout".into())
            .user_message()
            .contains("Network error"));
        assert!(ServiceError::Internal(String::new())
            .user_message()
            .contains("unexpected error"));
    }
}
