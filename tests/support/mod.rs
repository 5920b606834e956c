//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use proftafla::{Error, Result, ScheduleSource};

/// Build a schedule fragment with one `.box` section per `(heading, rows)`
/// pair, each row being `(course, name, kind, students, date)`.
pub fn fragment(sections: &[(&str, &[(&str, &str, &str, &str, &str)])]) -> String {
    let mut html = String::new();
    for (heading, rows) in sections {
        html.push_str(&format!("<div class=\"box\"><h3>{heading}</h3><table><tbody>"));
        for (course, name, kind, students, date) in rows.iter() {
            html.push_str(&format!(
                "<tr><td>{course}</td><td>{name}</td><td>{kind}</td>\
                 <td>{students}</td><td>{date}</td></tr>"
            ));
        }
        html.push_str("</tbody></table></div>");
    }
    html
}

/// Wrap a fragment in the JSON envelope the remote returns.
pub fn payload(html: &str) -> String {
    serde_json::json!({ "html": html }).to_string()
}

/// `ScheduleSource` stub that serves canned payloads and counts calls.
pub struct StubSource {
    payloads: Vec<(i32, String)>,
    calls: AtomicUsize,
}

impl StubSource {
    /// Serve the same payload for every department id.
    pub fn uniform(body: impl Into<String>) -> Arc<Self> {
        let body = body.into();
        Arc::new(Self {
            payloads: (1..=5).map(|id| (id, body.clone())).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    /// Serve a distinct payload per department id.
    pub fn per_department(payloads: Vec<(i32, String)>) -> Arc<Self> {
        Arc::new(Self {
            payloads,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleSource for StubSource {
    async fn fetch_raw(&self, department_id: i32) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads
            .iter()
            .find(|(id, _)| *id == department_id)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| Error::Network {
                message: format!("no stub payload for department {department_id}"),
            })
    }
}
