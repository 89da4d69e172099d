// Application layer - Use cases
pub mod narration;
pub mod row_analyzer;
pub mod template_service;
pub mod template_source;
pub mod video_service;
