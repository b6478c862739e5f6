//! Recover matchers from forwarded alert notifications.
//!
//! Notifications list the labels of each alert as indented `- name = value`
//! lines between a `Labels:` header and the annotations or source link:
//!
//! ```text
//! Alerts Firing:
//! Labels:
//!  - alertname = HighLoad
//!  - instance = host:9100
//! Annotations:
//!  - summary = Load is high
//! ```

use lazy_regex::regex;

use crate::{
    compiler::{error::LabelError, parse_labels},
    matcher::{quote, Matcher},
};

/// Extract the label section of an alert notification as a matcher expression,
/// one `name="value"` line per label. Returns an empty string if the text is not
/// an alert notification.
pub fn labels_from_alert(text: &str) -> String {
    let mut raw = String::new();
    let blocks = regex!(
        r"(?sm)^Alerts (?:Firing|Resolved):\nLabels:\n(.*?)\n(?:Annotations|Source):.*"
    );
    for block in blocks.captures_iter(text) {
        for label in regex!(r".*-\s+([^\s=]+)\s+=\s+(.+)").captures_iter(&block[1]) {
            raw.push_str(&label[1]);
            raw.push('=');
            raw.push_str(&quote(label[2].trim_end()));
            raw.push('\n');
        }
    }
    log::debug!("Scraped alert labels: {:?}", raw);
    raw
}

/// Compile the labels of an alert notification into matchers.
/// Repeated labels keep the last value seen.
pub fn matchers_from_alert(text: &str) -> Result<Vec<Matcher>, LabelError> {
    parse_labels(&labels_from_alert(text), false)
}
