use crate::domain::template::Template;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub templates: TemplateSourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
    pub max_body_bytes: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSourceKind {
    Builtin,
    File,
    Http,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSourceSettings {
    pub source: TemplateSourceKind,
    pub path: String,
    pub url: Option<String>,
    pub timeout_secs: u64,
}

/// Shape of a template catalog file, e.g. `config/templates.toml`
#[derive(Debug, Deserialize, Clone)]
pub struct TemplatesFile {
    #[serde(default)]
    pub templates: Vec<Template>,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/app")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind_address", "0.0.0.0:8080")?
        .set_default("server.max_body_bytes", 10 * 1024 * 1024)?
        .set_default("templates.source", "builtin")?
        .set_default("templates.path", "config/templates")?
        .set_default("templates.timeout_secs", 5)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_templates_file(path: &str) -> anyhow::Result<TemplatesFile> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}
