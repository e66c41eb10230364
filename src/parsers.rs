// Total parsers over raw probe output. Missing markers yield absent fields, never errors.

use crate::models::{ParsedReachability, WirelessDetails};
use regex::Regex;
use std::sync::LazyLock;

/// Windows ("Reply from") and POSIX ("64 bytes from") echo-reply markers.
const REPLY_MARKERS: [&str; 2] = ["Reply from", "bytes from"];

static LATENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"time[=<]([0-9.]+)").expect("latency pattern"));

// `[ \t]` rather than `\s` so an empty value never swallows the next line.
static BAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)band[ \t]*:[ \t]*(.*)").expect("band pattern"));

static SIGNAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)signal[ \t]*:[ \t]*(.*)").expect("signal pattern"));

/// Online status and latency are extracted independently of each other and of the exit status.
pub fn parse_reachability(raw_output: &str) -> ParsedReachability {
    let is_online = REPLY_MARKERS.iter().any(|m| raw_output.contains(m));
    ParsedReachability {
        is_online,
        latency_ms: parse_latency(raw_output),
    }
}

/// First `time=<n>` / `time<<n>` token in milliseconds.
pub fn parse_latency(raw_output: &str) -> Option<f64> {
    LATENCY_RE
        .captures(raw_output)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|ms| ms.is_finite())
}

pub fn parse_wireless(raw_output: &str) -> WirelessDetails {
    WirelessDetails {
        band: first_value(&BAND_RE, raw_output),
        signal: first_value(&SIGNAL_RE, raw_output),
    }
}

fn first_value(re: &Regex, raw_output: &str) -> Option<String> {
    re.captures(raw_output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Route traces are shown verbatim, hop by hop.
pub fn parse_route_trace(raw_output: &str) -> String {
    raw_output.to_string()
}
