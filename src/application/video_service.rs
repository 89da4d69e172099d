// Video service - Use case for turning table rows into video specs
use crate::application::narration::narration_script;
use crate::application::row_analyzer::{
    build_comparative_series, classify_columns, ColumnSelection, ComparativeSeries,
};
use crate::domain::chart::{ChartData, ChartOptions, ChartSpec, Dataset, BORDER_WIDTH};
use crate::domain::color::{darken, generate_palette};
use crate::domain::render_config::RenderConfig;
use crate::domain::table::{Row, Table};
use crate::domain::template::TemplateCatalog;
use crate::domain::video::VideoSpec;
use std::sync::Arc;

pub const MAX_VIDEOS: usize = 10;

const DESCRIPTION_FIELDS: usize = 3;
const DESCRIPTION_SEPARATOR: &str = " • ";
const BORDER_DARKEN_FACTOR: f64 = 0.2;

#[derive(Clone)]
pub struct VideoService {
    catalog: Arc<TemplateCatalog>,
}

impl VideoService {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// One spec per row, in table order, for at most the first ten rows.
    /// Never fails: dirty data degrades to defaults.
    pub fn generate_videos(&self, table: &Table, config: &RenderConfig) -> Vec<VideoSpec> {
        let videos: Vec<VideoSpec> = table
            .rows
            .iter()
            .take(MAX_VIDEOS)
            .enumerate()
            .map(|(index, row)| self.generate_video_for_row(row, index, table, config))
            .collect();

        tracing::info!(
            "Generated {} videos from {} ({} rows, template {})",
            videos.len(),
            table.file_name,
            table.rows.len(),
            self.catalog.lookup(&config.template).id
        );

        videos
    }

    fn generate_video_for_row(
        &self,
        row: &Row,
        index: usize,
        table: &Table,
        config: &RenderConfig,
    ) -> VideoSpec {
        let number = index + 1;
        let columns = classify_columns(row, &table.headers);
        let series = build_comparative_series(row, index, table, &columns);
        let chart = self.build_chart(number, &columns, series, config);

        let narration = if config.include_narration {
            narration_script(row, &chart.title)
        } else {
            String::new()
        };

        tracing::debug!(
            "video_{}: primary={} label={} points={}",
            number,
            columns.primary,
            columns.label,
            chart.dataset().data.len()
        );

        VideoSpec {
            id: format!("video_{}", number),
            title: video_title(row, &table.headers, number),
            description: video_description(row, &table.headers),
            duration: config.duration,
            format: config.format,
            chart_data: chart,
            narration_script: narration,
            row_data: row.clone(),
        }
    }

    fn build_chart(
        &self,
        number: usize,
        columns: &ColumnSelection,
        series: ComparativeSeries,
        config: &RenderConfig,
    ) -> ChartSpec {
        let template = self.catalog.lookup(&config.template);
        let base_color = config
            .accent_color
            .as_deref()
            .unwrap_or(&template.style.accent_color);

        let colors = generate_palette(series.values.len(), base_color);
        let borders = colors
            .iter()
            .map(|c| darken(c, BORDER_DARKEN_FACTOR))
            .collect();

        ChartSpec {
            id: format!("chart_{}", number),
            chart_type: config.chart_type,
            title: format!("{} Analysis", columns.primary),
            description: format!(
                "Data visualization for {} vs {}",
                columns.label, columns.primary
            ),
            data: ChartData {
                labels: series.labels,
                datasets: vec![Dataset {
                    label: columns.primary.clone(),
                    data: series.values,
                    background_color: colors,
                    border_color: borders,
                    border_width: BORDER_WIDTH,
                }],
            },
            options: ChartOptions::for_chart(
                config.chart_type,
                format!("{} by {}", columns.primary, columns.label),
            ),
        }
    }
}

fn video_title(row: &Row, headers: &[String], number: usize) -> String {
    if let Some(first) = headers.first() {
        if let Some(value) = row.get(first).filter(|v| v.is_truthy()) {
            return format!("{}: {}", first, value);
        }
    }
    format!("Data Analysis {}", number)
}

fn video_description(row: &Row, headers: &[String]) -> String {
    headers
        .iter()
        .take(DESCRIPTION_FIELDS)
        .filter_map(|header| {
            row.get(header)
                .filter(|v| v.is_present())
                .map(|v| format!("{}: {}", header, v))
        })
        .collect::<Vec<_>>()
        .join(DESCRIPTION_SEPARATOR)
}
