// Template source trait for loading the template catalog
use crate::domain::template::Template;
use async_trait::async_trait;

#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Human readable origin, used in logs
    fn describe(&self) -> String;

    /// Load every template this source provides, in catalog order
    async fn load_templates(&self) -> anyhow::Result<Vec<Template>>;
}
