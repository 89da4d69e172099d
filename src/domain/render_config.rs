// Rendering configuration chosen by the user
use super::color::is_valid_hex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AspectFormat {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "1:1")]
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Scatter,
    Area,
    Doughnut,
}

impl ChartType {
    /// Pie-like charts have a legend and no axes.
    pub fn is_radial(&self) -> bool {
        matches!(self, ChartType::Pie | ChartType::Doughnut)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("duration must be greater than zero")]
    ZeroDuration,

    #[error("{field} is not a #RRGGBB color: {value}")]
    InvalidColor { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub template: String,
    pub duration: u32,
    pub format: AspectFormat,
    pub include_narration: bool,
    pub chart_type: ChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: "modern".to_string(),
            duration: 30,
            format: AspectFormat::default(),
            include_narration: true,
            chart_type: ChartType::default(),
            background_color: None,
            text_color: None,
            accent_color: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }

        let overrides = [
            ("accentColor", &self.accent_color),
            ("backgroundColor", &self.background_color),
            ("textColor", &self.text_color),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                if !is_valid_hex(value) {
                    return Err(ConfigError::InvalidColor {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: RenderConfig = serde_json::from_str(r#"{"chartType": "pie"}"#).unwrap();
        assert_eq!(config.template, "modern");
        assert_eq!(config.duration, 30);
        assert_eq!(config.format, AspectFormat::Landscape);
        assert!(config.include_narration);
        assert_eq!(config.chart_type, ChartType::Pie);
    }

    #[test]
    fn test_format_wire_names() {
        let config: RenderConfig = serde_json::from_str(r#"{"format": "9:16"}"#).unwrap();
        assert_eq!(config.format, AspectFormat::Portrait);
        assert_eq!(serde_json::to_string(&AspectFormat::Square).unwrap(), "\"1:1\"");
        assert!(serde_json::from_str::<RenderConfig>(r#"{"format": "4:3"}"#).is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));

        let zero = RenderConfig {
            duration: 0,
            ..RenderConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroDuration));

        let bad_accent = RenderConfig {
            accent_color: Some("#12345".to_string()),
            ..RenderConfig::default()
        };
        assert!(matches!(
            bad_accent.validate(),
            Err(ConfigError::InvalidColor { field: "accentColor", .. })
        ));

        let good_accent = RenderConfig {
            accent_color: Some("#10B981".to_string()),
            ..RenderConfig::default()
        };
        assert_eq!(good_accent.validate(), Ok(()));
    }

    #[test]
    fn test_radial_types() {
        assert!(ChartType::Pie.is_radial());
        assert!(ChartType::Doughnut.is_radial());
        assert!(!ChartType::Bar.is_radial());
        assert!(!ChartType::Area.is_radial());
    }
}
