use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_system_name")]
    pub system_name: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type", default = "default_backend")]
    pub backend: String, // 存储后端类型（json / memory）
    #[serde(default = "default_data_dir")]
    pub data_dir: String, // JSON 文件存放目录
    #[serde(default = "default_seed_on_empty")]
    pub seed_on_empty: bool, // 首次运行时是否写入示例数据
}

fn default_system_name() -> String {
    "AssignTrack".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_backend() -> String {
    "json".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_seed_on_empty() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: default_system_name(),
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
            seed_on_empty: default_seed_on_empty(),
        }
    }
}
