use once_cell::sync::OnceCell;
use std::env;

/// Runtime settings for the list editor binaries, read from the process
/// environment after an optional `.env` file has been loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    /// Append log records to this file in addition to stderr.
    pub log_file: Option<String>,
    /// Raw policy name; `list_editor` parses it into its policy enum.
    pub single_node_policy: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Loads `env_path` (if it exists) and freezes the resulting configuration.
    /// Later calls return the first value regardless of `env_path`.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(Self::from_env)
    }

    pub fn get() -> Option<&'static Self> {
        CONFIG.get()
    }

    pub fn from_env() -> Self {
        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "list-editor".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".into());
        let log_file = env::var("LOG_FILE")
            .ok()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        let single_node_policy =
            env::var("SINGLE_NODE_POLICY").unwrap_or_else(|_| "remove".into());

        Config {
            project_name,
            log_level,
            log_file,
            single_node_policy,
        }
    }
}
