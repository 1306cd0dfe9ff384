//! Outbound mail via the Resend HTTP API
//!
//! The contact endpoint is the only mail producer. When no API key is
//! configured the mailer is absent and the endpoint reports
//! service-unavailable instead of silently dropping submissions.

use atrium_common::config::Config;
use atrium_common::{Error, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// A validated contact-form submission.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    html: String,
}

pub struct Mailer {
    http: reqwest::Client,
    api_key: String,
    from: String,
    to: String,
}

impl Mailer {
    /// Build a mailer from config; `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.resend_api_key.clone()?;
        let http = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_default();

        Some(Self {
            http,
            api_key,
            from: config.contact_from.clone(),
            to: config.contact_to.clone(),
        })
    }

    /// Send the formatted notification email for a contact submission.
    pub async fn send_contact_notification(&self, submission: &ContactSubmission) -> Result<()> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [self.to.as_str()],
            reply_to: &submission.email,
            subject: format!("New contact form submission from {}", submission.name),
            html: render_notification(submission),
        };

        let response = self
            .http
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Mail(format!("Failed to reach mail provider: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = %status, detail = %detail, "Mail provider rejected send");
            return Err(Error::Mail(format!("Mail provider returned {status}")));
        }

        info!(from = %submission.email, "Contact notification sent");
        Ok(())
    }
}

fn render_notification(s: &ContactSubmission) -> String {
    let mut html = format!(
        "<h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>",
        escape(&s.name),
        escape(&s.email),
    );
    if let Some(company) = s.company.as_deref().filter(|c| !c.is_empty()) {
        html.push_str(&format!("<p><strong>Company:</strong> {}</p>", escape(company)));
    }
    if let Some(phone) = s.phone.as_deref().filter(|p| !p.is_empty()) {
        html.push_str(&format!("<p><strong>Phone:</strong> {}</p>", escape(phone)));
    }
    html.push_str(&format!(
        "<p><strong>Message:</strong></p><p>{}</p>",
        escape(&s.message).replace('\n', "<br>")
    ));
    html
}

/// Submitted values are untrusted; escape them before embedding in HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
