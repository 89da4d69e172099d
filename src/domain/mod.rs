// Domain layer - Pure data types and algorithms
pub mod chart;
pub mod color;
pub mod render_config;
pub mod table;
pub mod template;
pub mod video;
