use reqwest::Client;

use crate::services::error::ServiceError;

/// Fetches stored bytes from their origin URL on the external CDN.
///
/// The wrapped `reqwest::Client` pools connections, so one instance is
/// shared across the whole application.
#[derive(Clone)]
pub struct OriginClient {
    client: Client,
}

impl OriginClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// The body is left unread so callers can stream it through to the
    /// client. A non-success origin status surfaces as an upstream error;
    /// no retries.
    pub async fn fetch(&self, url: &str) -> Result<reqwest::Response, ServiceError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::UpstreamStatus(response.status().as_u16()));
        }

        Ok(response)
    }
}

impl Default for OriginClient {
    fn default() -> Self {
        Self::new()
    }
}

/// `Content-Disposition` value that forces a download under the record's
/// display name, percent-encoded so arbitrary names survive the header.
pub fn attachment_disposition(name: &str) -> String {
    format!("attachment; filename=\"{}\"", urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_keeps_plain_names() {
        assert_eq!(
            attachment_disposition("photo.png"),
            "attachment; filename=\"photo.png\""
        );
    }

    #[test]
    fn disposition_percent_encodes_special_characters() {
        assert_eq!(
            attachment_disposition("my report (final).pdf"),
            "attachment; filename=\"my%20report%20%28final%29.pdf\""
        );
        let quoted = attachment_disposition("a\"b.txt");
        assert!(!quoted.contains("\"b"));
        assert!(quoted.contains("%22"));
    }
}
