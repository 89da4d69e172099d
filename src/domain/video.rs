// Generated video domain model
use super::chart::ChartSpec;
use super::render_config::AspectFormat;
use super::table::Row;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One synthesized video description. Rendering it is left to downstream tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSpec {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: u32,
    pub format: AspectFormat,
    pub chart_data: ChartSpec,
    pub narration_script: String,
    pub row_data: Row,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBatch {
    pub source_name: String,
    pub generated_at: DateTime<Utc>,
    pub videos: Vec<VideoSpec>,
}

impl VideoBatch {
    pub fn new(source_name: String, videos: Vec<VideoSpec>) -> Self {
        Self {
            source_name,
            generated_at: Utc::now(),
            videos,
        }
    }
}
