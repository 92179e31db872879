use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    pub limits: LimitsConfig,
}

/// Ограничения мастера загрузки
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    /// Максимальный размер файла пакета, в мегабайтах
    pub max_file_size_mb: u64,
    /// Максимальное количество тегов у агента
    pub max_tags: usize,
    /// Минимальная длина имени агента
    pub min_name_len: usize,
    /// Максимальная длина имени агента
    pub max_name_len: usize,
    /// Максимальная длина описания
    pub max_description_len: usize,
}

impl LimitsConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        toml::from_str::<UploadConfig>(DEFAULT_CONFIG)
            .expect("embedded default config is valid")
            .limits
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[limits]
max_file_size_mb = 100
max_tags = 10
min_name_len = 3
max_name_len = 100
max_description_len = 1000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<UploadConfig> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: UploadConfig = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: UploadConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
