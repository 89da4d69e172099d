// Application state for HTTP handlers
use crate::application::template_service::TemplateService;
use crate::application::video_service::VideoService;

#[derive(Clone)]
pub struct AppState {
    pub template_service: TemplateService,
    pub video_service: VideoService,
}
