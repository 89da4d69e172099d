// Visual template domain model
use super::color::is_valid_hex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Minimal,
    Detailed,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartEntry {
    Fade,
    Slide,
    Bounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEntry {
    Typewriter,
    Fade,
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Smooth,
    Cut,
    Wipe,
}

// Config files lowercase their keys, so snake_case is the primary input
// spelling and camelCase is accepted as an alias for JSON sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TemplateStyle {
    #[serde(alias = "backgroundColor")]
    pub background_color: String,
    #[serde(alias = "textColor")]
    pub text_color: String,
    #[serde(alias = "accentColor")]
    pub accent_color: String,
    #[serde(alias = "fontFamily")]
    pub font_family: String,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AnimationStyle {
    #[serde(alias = "chartEntry")]
    pub chart_entry: ChartEntry,
    #[serde(alias = "textEntry")]
    pub text_entry: TextEntry,
    pub transition: Transition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub style: TemplateStyle,
    pub animation: AnimationStyle,
}

impl Template {
    fn builtin(
        id: &str,
        name: &str,
        description: &str,
        colors: [&str; 3],
        font_family: &str,
        layout: Layout,
        animation: (ChartEntry, TextEntry, Transition),
    ) -> Self {
        let [background_color, text_color, accent_color] = colors;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            style: TemplateStyle {
                background_color: background_color.to_string(),
                text_color: text_color.to_string(),
                accent_color: accent_color.to_string(),
                font_family: font_family.to_string(),
                layout,
            },
            animation: AnimationStyle {
                chart_entry: animation.0,
                text_entry: animation.1,
                transition: animation.2,
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("template catalog is empty")]
    Empty,

    #[error("duplicate template id: {0}")]
    DuplicateId(String),

    #[error("template {id} has invalid {field}: {value}")]
    InvalidColor {
        id: String,
        field: &'static str,
        value: String,
    },
}

/// Read-only registry of templates. The first entry is the fallback.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        for template in &templates {
            if !ids.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateId(template.id.clone()));
            }

            let style = &template.style;
            let colors = [
                ("backgroundColor", &style.background_color),
                ("textColor", &style.text_color),
                ("accentColor", &style.accent_color),
            ];
            for (field, value) in colors {
                if !is_valid_hex(value) {
                    return Err(CatalogError::InvalidColor {
                        id: template.id.clone(),
                        field,
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(Self { templates })
    }

    pub fn builtin() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }

    /// Template with the given id, or the default entry when unknown.
    pub fn lookup(&self, id: &str) -> &Template {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .unwrap_or(&self.templates[0])
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::builtin(
            "modern",
            "Modern",
            "Clean lines with a bold blue accent",
            ["#ffffff", "#1f2937", "#3b82f6"],
            "Inter, sans-serif",
            Layout::Minimal,
            (ChartEntry::Fade, TextEntry::Fade, Transition::Smooth),
        ),
        Template::builtin(
            "corporate",
            "Corporate",
            "Structured layout for business reporting",
            ["#f8fafc", "#0f172a", "#1e40af"],
            "Helvetica, Arial, sans-serif",
            Layout::Detailed,
            (ChartEntry::Slide, TextEntry::Fade, Transition::Cut),
        ),
        Template::builtin(
            "vibrant",
            "Vibrant",
            "Energetic colors and playful motion",
            ["#fff7ed", "#431407", "#f97316"],
            "Poppins, sans-serif",
            Layout::Creative,
            (ChartEntry::Bounce, TextEntry::Typewriter, Transition::Wipe),
        ),
        Template::builtin(
            "minimal",
            "Minimal",
            "Monochrome with a single green highlight",
            ["#fafafa", "#171717", "#10b981"],
            "Georgia, serif",
            Layout::Minimal,
            (ChartEntry::Fade, TextEntry::Slide, Transition::Smooth),
        ),
        Template::builtin(
            "dark",
            "Dark",
            "High contrast on a dark background",
            ["#111827", "#f9fafb", "#a855f7"],
            "Inter, sans-serif",
            Layout::Detailed,
            (ChartEntry::Slide, TextEntry::Typewriter, Transition::Smooth),
        ),
    ]
}
