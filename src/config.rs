use anyhow::{Result, bail};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://whoknows.db";
pub const DEFAULT_PAGES_JSON_PATH: &str = "pages_data.json";
pub const DEFAULT_SEEDS_PATH: &str = "priv/repo/seeds.exs";
pub const DEFAULT_APP_MODULE: &str = "WhoknowsElixirMonolith";

#[derive(Clone, Debug)]
pub struct MigrateConfig {
    pub database_url: String,
    pub pages_json_path: PathBuf,
    pub seeds_path: PathBuf,
    pub app_module: String,
}

impl MigrateConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank values take the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|val| !val.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = var("DATABASE_URL", DEFAULT_DATABASE_URL);
        let pages_json_path = PathBuf::from(var("PAGES_JSON_PATH", DEFAULT_PAGES_JSON_PATH));
        let seeds_path = PathBuf::from(var("SEEDS_PATH", DEFAULT_SEEDS_PATH));

        // rendered into `alias {app_module}.Repo`, so it has to be a valid alias
        let app_module = var("ELIXIR_APP_MODULE", DEFAULT_APP_MODULE);
        if !is_elixir_alias(&app_module) {
            bail!(
                "ELIXIR_APP_MODULE '{}' is not an Elixir module alias (e.g. MyApp or MyApp.Web)",
                app_module
            );
        }

        Ok(Self {
            database_url,
            pages_json_path,
            seeds_path,
            app_module,
        })
    }
}

// `Foo`, `Foo.Bar2`, `Foo_bar.Baz`: each segment starts with an uppercase ASCII letter
pub fn is_elixir_alias(name: &str) -> bool {
    name.split('.').all(|segment| {
        let mut chars = segment.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            pages_json_path: PathBuf::from(DEFAULT_PAGES_JSON_PATH),
            seeds_path: PathBuf::from(DEFAULT_SEEDS_PATH),
            app_module: DEFAULT_APP_MODULE.to_string(),
        }
    }
}
