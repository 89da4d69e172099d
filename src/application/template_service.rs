// Template service - Loads the catalog once and answers lookups
use crate::application::template_source::TemplateSource;
use crate::domain::template::{Template, TemplateCatalog};
use std::sync::Arc;

#[derive(Clone)]
pub struct TemplateService {
    catalog: Arc<TemplateCatalog>,
}

impl TemplateService {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// Build the catalog from `source`, falling back to the builtin templates
    /// when the source fails or returns an unusable catalog.
    pub async fn load(source: &dyn TemplateSource) -> Self {
        let catalog = match source.load_templates().await {
            Ok(templates) => match TemplateCatalog::new(templates) {
                Ok(catalog) => {
                    tracing::info!(
                        "Loaded {} templates from {}",
                        catalog.templates().len(),
                        source.describe()
                    );
                    catalog
                }
                Err(e) => {
                    tracing::warn!(
                        "Invalid template catalog from {}: {}; using builtin templates",
                        source.describe(),
                        e
                    );
                    TemplateCatalog::builtin()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to load templates from {}: {:#}; using builtin templates",
                    source.describe(),
                    e
                );
                TemplateCatalog::builtin()
            }
        };

        Self::new(Arc::new(catalog))
    }

    pub fn catalog(&self) -> Arc<TemplateCatalog> {
        self.catalog.clone()
    }

    pub fn list_templates(&self) -> &[Template] {
        self.catalog.templates()
    }

    pub fn get_template(&self, id: &str) -> &Template {
        self.catalog.lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::builtin_templates;
    use async_trait::async_trait;

    struct StubSource {
        templates: Option<Vec<Template>>,
    }

    #[async_trait]
    impl TemplateSource for StubSource {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        async fn load_templates(&self) -> anyhow::Result<Vec<Template>> {
            match &self.templates {
                Some(templates) => Ok(templates.clone()),
                None => anyhow::bail!("source unavailable"),
            }
        }
    }

    #[tokio::test]
    async fn test_load_uses_source_templates() {
        let mut templates = builtin_templates();
        templates.rotate_left(2);
        let service = TemplateService::load(&StubSource {
            templates: Some(templates),
        })
        .await;

        assert_eq!(service.list_templates()[0].id, "vibrant");
        assert_eq!(service.get_template("unknown").id, "vibrant");
    }

    #[tokio::test]
    async fn test_load_falls_back_on_error() {
        let service = TemplateService::load(&StubSource { templates: None }).await;
        assert_eq!(service.list_templates(), TemplateCatalog::builtin().templates());
    }

    #[tokio::test]
    async fn test_load_falls_back_on_empty_catalog() {
        let service = TemplateService::load(&StubSource {
            templates: Some(Vec::new()),
        })
        .await;
        assert_eq!(service.get_template("modern").id, "modern");
    }
}
