//! Output formatting for the command-line binary
//!
//! Two renderings of a result block:
//! - Plain text: the value, followed by the data payload when there is one
//! - JSON: the full block, with `data` as `null` when it holds the sentinel
//!
//! # Examples
//!
//! ```
//! use nfunc::output::get_formatter;
//! use nfunc_core::{Output, Reply};
//!
//! let reply = Reply::from(Ok(Output::instant("1/1/1970 12:00:00 AM", 0)));
//! assert_eq!(get_formatter(false).format_reply(&reply), "1/1/1970 12:00:00 AM\t0");
//! assert!(get_formatter(true).format_reply(&reply).contains("\"status\": \"ok\""));
//! ```

use nfunc_core::types::{NO_DATA, Reply};
use serde_json::json;

/// Renders a result block for the terminal
pub trait OutputFormatter {
    fn format_reply(&self, reply: &Reply) -> String;
}

/// Tab-separated plain text
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_reply(&self, reply: &Reply) -> String {
        if reply.is_ok() && reply.data != NO_DATA {
            format!("{}\t{}", reply.value, reply.data)
        } else {
            reply.value.clone()
        }
    }
}

/// Pretty-printed JSON object
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_reply(&self, reply: &Reply) -> String {
        let data = (reply.data != NO_DATA).then_some(reply.data);
        let output = json!({
            "value": reply.value,
            "data": data,
            "status": reply.status,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    }
}

/// Pick a formatter for the `--json` flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
