pub mod error;
pub mod utils;

pub use error::{AgentError, Endpoint, Result, UpstreamError, UpstreamFailure};
pub use utils::{json_bool, json_i64, json_str, json_truthy, log_filter_warn, sanitize_file_stem};
