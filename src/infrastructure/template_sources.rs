// Template source implementations: builtin, config file, remote HTTP
use crate::application::template_source::TemplateSource;
use crate::domain::template::{builtin_templates, Template};
use crate::infrastructure::config::{load_templates_file, TemplateSourceKind, TemplateSourceSettings};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

pub struct BuiltinTemplateSource;

#[async_trait]
impl TemplateSource for BuiltinTemplateSource {
    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }

    async fn load_templates(&self) -> Result<Vec<Template>> {
        Ok(builtin_templates())
    }
}

#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: String,
}

impl FileTemplateSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    fn describe(&self) -> String {
        format!("file {}", self.path)
    }

    async fn load_templates(&self) -> Result<Vec<Template>> {
        let path = self.path.clone();
        let file = tokio::task::spawn_blocking(move || load_templates_file(&path))
            .await
            .context("Template file loader panicked")?
            .with_context(|| format!("Failed to read template file {}", self.path))?;
        Ok(file.templates)
    }
}

#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    url: String,
    timeout: Duration,
}

impl HttpTemplateSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }
}

#[async_trait]
impl TemplateSource for HttpTemplateSource {
    fn describe(&self) -> String {
        format!("remote catalog {}", self.url)
    }

    async fn load_templates(&self) -> Result<Vec<Template>> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to template catalog")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Template catalog request failed with status {}: {}", status, body);
        }

        response
            .json::<Vec<Template>>()
            .await
            .context("Failed to parse template catalog")
    }
}

/// Pick the source named by configuration
pub fn source_from_settings(settings: &TemplateSourceSettings) -> Result<Box<dyn TemplateSource>> {
    match settings.source {
        TemplateSourceKind::Builtin => Ok(Box::new(BuiltinTemplateSource)),
        TemplateSourceKind::File => Ok(Box::new(FileTemplateSource::new(settings.path.clone()))),
        TemplateSourceKind::Http => {
            let url = settings
                .url
                .clone()
                .context("templates.url is required when templates.source = \"http\"")?;
            Ok(Box::new(HttpTemplateSource::new(
                url,
                Duration::from_secs(settings.timeout_secs),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(source: TemplateSourceKind, url: Option<&str>) -> TemplateSourceSettings {
        TemplateSourceSettings {
            source,
            path: concat!(env!("CARGO_MANIFEST_DIR"), "/config/templates").to_string(),
            url: url.map(str::to_string),
            timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn test_file_source_matches_builtin() {
        let source = source_from_settings(&settings(TemplateSourceKind::File, None)).unwrap();
        let templates = source.load_templates().await.unwrap();
        assert_eq!(templates, builtin_templates());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let source = FileTemplateSource::new("config/no-such-catalog".to_string());
        assert!(source.load_templates().await.is_err());
    }

    #[test]
    fn test_http_source_requires_url() {
        assert!(source_from_settings(&settings(TemplateSourceKind::Http, None)).is_err());

        let source =
            source_from_settings(&settings(TemplateSourceKind::Http, Some("http://localhost:1/t.json")))
                .unwrap();
        assert_eq!(source.describe(), "remote catalog http://localhost:1/t.json");
    }

    #[tokio::test]
    async fn test_unreachable_http_source_is_an_error() {
        let source = HttpTemplateSource::new(
            "http://127.0.0.1:1/templates.json".to_string(),
            Duration::from_millis(200),
        );
        assert!(source.load_templates().await.is_err());
    }
}
