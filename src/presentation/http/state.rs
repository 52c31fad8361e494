// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::middleware::AccessLogConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub access_log: Arc<AccessLogConfig>,
}
