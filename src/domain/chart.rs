// Chart specification domain model (Chart.js-shaped)
use super::render_config::ChartType;
use serde::Serialize;

pub const BORDER_WIDTH: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub title: TitleOptions,
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl ChartOptions {
    /// Legend for radial charts, zero-based y axis for everything else.
    pub fn for_chart(chart_type: ChartType, title_text: String) -> Self {
        let radial = chart_type.is_radial();
        Self {
            responsive: true,
            plugins: PluginOptions {
                title: TitleOptions {
                    display: true,
                    text: title_text,
                },
                legend: LegendOptions { display: radial },
            },
            scales: if radial {
                None
            } else {
                Some(Scales {
                    y: AxisOptions { begin_at_zero: true },
                })
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub title: String,
    pub description: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn dataset(&self) -> &Dataset {
        &self.data.datasets[0]
    }
}
