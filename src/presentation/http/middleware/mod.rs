pub mod access_log;
pub mod etag;
pub mod panic;
pub mod request_id;

pub use access_log::{AccessLogConfig, AccessLogFields, log_requests};
pub use etag::tag_responses;
pub use panic::handle_panic;
pub use request_id::MakeRequestUuid;
