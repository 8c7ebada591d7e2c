//! Verbose request tracing.
//!
//! Describes an outgoing request (URL, method, headers and JSON body) in the
//! layout printed before the call is made, and holds the sink it goes to.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use reqwest::header::AUTHORIZATION;

/// Shared destination for request traces, stderr in the binary.
#[derive(Clone)]
pub struct TraceSink(Arc<Mutex<Box<dyn Write + Send>>>);

impl TraceSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Writes one trace and flushes it.
    pub fn write(&self, trace: &str) -> io::Result<()> {
        let mut writer = self
            .0
            .lock()
            .map_err(|_| io::Error::other("trace sink lock poisoned"))?;
        writer.write_all(trace.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for TraceSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TraceSink")
    }
}

/// Hides all but the last four characters of a bearer token.
pub fn redact_authorization(value: &str) -> String {
    let Some(token) = value.strip_prefix("Bearer ") else {
        return "****".to_string();
    };
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "Bearer ****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("Bearer ****{tail}")
}

fn format_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Renders the trace for `request`.
pub fn format_request(request: &reqwest::Request) -> String {
    let mut out = String::from("Request\n");
    out.push_str(&format!("URL: {}\n", request.url()));
    out.push_str(&format!("Method: {}\n", request.method()));
    out.push_str("Headers:\n");
    for (name, value) in request.headers() {
        let value = value.to_str().unwrap_or("<binary>");
        let value = if *name == AUTHORIZATION {
            redact_authorization(value)
        } else {
            value.to_string()
        };
        out.push_str(&format!("\t{name}: {value}\n"));
    }
    if let Some(bytes) = request.body().and_then(|body| body.as_bytes()) {
        out.push_str("Body:\n");
        out.push_str(&format_body(bytes));
        out.push('\n');
    }
    out.push_str("\nOutput\n");
    out
}
