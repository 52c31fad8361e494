// src/presentation/http/middleware/access_log.rs
use crate::presentation::http::error::ErrorDetail;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, header::USER_AGENT},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, sync::Arc, time::Instant};

/// Which attributes each access-log line carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessLogFields {
    pub ip: bool,
    pub latency: bool,
    pub status: bool,
    pub method: bool,
    pub url: bool,
    pub error: bool,
    pub user_agent: bool,
    pub request_id: bool,
}

impl AccessLogFields {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut fields = Self::default();
        for name in names {
            match name.as_ref().trim().to_ascii_lowercase().as_str() {
                "ip" => fields.ip = true,
                "latency" => fields.latency = true,
                "status" => fields.status = true,
                "method" => fields.method = true,
                "url" => fields.url = true,
                "error" => fields.error = true,
                "ua" | "user_agent" | "useragent" => fields.user_agent = true,
                "requestid" | "request_id" => fields.request_id = true,
                other => tracing::warn!(field = other, "ignoring unknown access log field"),
            }
        }
        fields
    }
}

#[derive(Debug, Clone)]
pub struct AccessLogConfig {
    fields: AccessLogFields,
    proxy_header: Option<HeaderName>,
}

impl AccessLogConfig {
    pub fn new<S: AsRef<str>>(field_names: &[S], proxy_header: Option<&str>) -> Self {
        let proxy_header = proxy_header.and_then(|name| match HeaderName::try_from(name) {
            Ok(header) => Some(header),
            Err(err) => {
                tracing::warn!(header = name, error = %err, "ignoring invalid proxy header");
                None
            }
        });
        Self {
            fields: AccessLogFields::from_names(field_names),
            proxy_header,
        }
    }

    pub fn fields(&self) -> AccessLogFields {
        self.fields
    }

    /// Client address: first entry of the proxy header when one is
    /// configured and present, otherwise the peer address of the socket.
    pub fn client_ip(&self, req: &Request) -> Option<String> {
        let forwarded = self
            .proxy_header
            .as_ref()
            .and_then(|name| req.headers().get(name))
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from);

        forwarded.or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
    }
}

fn header_string(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

macro_rules! access_event {
    ($level:expr, $line:expr) => {{
        let line = $line;
        tracing::event!(
            target: "access",
            $level,
            ip = line.ip.as_deref(),
            latency_ms = line.latency_ms,
            status = line.status,
            method = line.method.as_deref(),
            url = line.url.as_deref(),
            error = line.error.as_deref(),
            user_agent = line.user_agent.as_deref(),
            request_id = line.request_id.as_deref(),
            "request handled"
        );
    }};
}

#[derive(Debug, Default)]
struct AccessLine {
    ip: Option<String>,
    latency_ms: Option<f64>,
    status: Option<u16>,
    method: Option<String>,
    url: Option<String>,
    error: Option<String>,
    user_agent: Option<String>,
    request_id: Option<String>,
}

/// Emits one structured line per request; 5xx at error level, 4xx at warn.
/// The cause of a 5xx is included even when the `error` field is off.
pub async fn log_requests(
    State(config): State<Arc<AccessLogConfig>>,
    req: Request,
    next: Next,
) -> Response {
    let fields = config.fields();
    let started = Instant::now();

    let mut line = AccessLine {
        ip: if fields.ip { config.client_ip(&req) } else { None },
        method: fields.method.then(|| req.method().to_string()),
        url: fields.url.then(|| req.uri().to_string()),
        user_agent: if fields.user_agent {
            header_string(&req, USER_AGENT.as_str())
        } else {
            None
        },
        request_id: if fields.request_id {
            header_string(&req, "x-request-id")
        } else {
            None
        },
        ..AccessLine::default()
    };

    let response = next.run(req).await;
    let status = response.status();

    line.latency_ms = fields
        .latency
        .then(|| started.elapsed().as_secs_f64() * 1000.0);
    line.status = fields.status.then(|| status.as_u16());
    // Server errors always carry their cause; nothing else logs it.
    if fields.error || status.is_server_error() {
        line.error = response
            .extensions()
            .get::<ErrorDetail>()
            .map(|detail| detail.0.clone());
    }

    if status.is_server_error() {
        access_event!(tracing::Level::ERROR, line);
    } else if status.is_client_error() {
        access_event!(tracing::Level::WARN, line);
    } else {
        access_event!(tracing::Level::INFO, line);
    }

    response
}
