//! Response envelope and status classification.
//!
//! Every portal response has the shape
//! `{"statusCode": n, "message": "...", "data": ...}`. The HTTP status is
//! authoritative; `message` is sometimes an array of validation messages.

use jobseeker_application::PortalError;
use jobseeker_domain::SessionToken;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    data: Value,
}

impl Envelope {
    pub fn message(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join("; "))
            }
            _ => None,
        }
    }

    /// Decode the whole `data` value
    pub fn data<T: DeserializeOwned>(self) -> Result<T, PortalError> {
        serde_json::from_value(self.data).map_err(|e| PortalError::Decode(e.to_string()))
    }

    /// Decode `data.<key>`
    pub fn field<T: DeserializeOwned>(mut self, key: &str) -> Result<T, PortalError> {
        let value = self
            .data
            .get_mut(key)
            .map(Value::take)
            .ok_or_else(|| PortalError::Decode(format!("missing data.{}", key)))?;
        serde_json::from_value(value)
            .map_err(|e| PortalError::Decode(format!("data.{}: {}", key, e)))
    }

    /// `data.token`, if present and non-blank
    pub fn token(&self) -> Option<SessionToken> {
        let raw = self.data.get("token").and_then(Value::as_str)?;
        SessionToken::new(raw).ok()
    }
}

/// Turn a status code and raw body into an envelope or a classified error.
///
/// A success response with an unreadable body yields an empty envelope;
/// callers that need `data` then fail with [`PortalError::Decode`].
pub(crate) fn classify(status: u16, body: &str) -> Result<Envelope, PortalError> {
    let envelope = if body.trim().is_empty() {
        Envelope::default()
    } else {
        serde_json::from_str::<Envelope>(body).unwrap_or_else(|e| {
            debug!("Response body is not a portal envelope: {}", e);
            Envelope::default()
        })
    };

    if (200..300).contains(&status) {
        return Ok(envelope);
    }

    let message = envelope.message();
    Err(match status {
        401 => PortalError::Unauthorized(message),
        404 => PortalError::NotFound,
        409 => PortalError::Conflict(message),
        _ => PortalError::Server { status, message },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobseeker_domain::{JobVacancyPage, OptionItem};

    #[test]
    fn test_success_statuses() {
        assert!(classify(200, "").is_ok());
        assert!(classify(201, r#"{"statusCode":201,"message":"Created"}"#).is_ok());
        assert!(classify(204, "").is_ok());
    }

    #[test]
    fn test_error_statuses() {
        assert!(matches!(
            classify(401, r#"{"message":"Invalid credentials"}"#),
            Err(PortalError::Unauthorized(Some(m))) if m == "Invalid credentials"
        ));
        assert!(matches!(classify(404, ""), Err(PortalError::NotFound)));
        assert!(matches!(
            classify(409, r#"{"message":"Email already registered"}"#),
            Err(PortalError::Conflict(Some(_)))
        ));
        assert!(matches!(
            classify(500, "<html>oops</html>"),
            Err(PortalError::Server {
                status: 500,
                message: None
            })
        ));
        assert!(matches!(
            classify(400, r#"{"message":["phone too short","dob required"]}"#),
            Err(PortalError::Server { status: 400, message: Some(m) })
                if m == "phone too short; dob required"
        ));
    }

    #[test]
    fn test_vacancy_page_data() {
        let body = r#"{
            "statusCode": 200,
            "data": {
                "job_vacancies": [{"id": 1, "job_title": "Backend Engineer"}],
                "totalPages": 4
            }
        }"#;
        let page: JobVacancyPage = classify(200, body).unwrap().data().unwrap();
        assert_eq!(page.job_vacancies.len(), 1);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_options_field() {
        let body = r#"{"data": {"months": [{"id": 1, "param_data": "Januari"}]}}"#;
        let months: Vec<OptionItem> = classify(200, body).unwrap().field("months").unwrap();
        assert_eq!(months[0].param_data, "Januari");

        let missing = classify(200, body).unwrap().field::<Vec<OptionItem>>("years");
        assert!(matches!(missing, Err(PortalError::Decode(_))));
    }

    #[test]
    fn test_unreadable_success_body_fails_on_data() {
        let envelope = classify(200, "OK").unwrap();
        assert!(matches!(
            envelope.data::<JobVacancyPage>(),
            Err(PortalError::Decode(_))
        ));
    }

    #[test]
    fn test_token() {
        let envelope = classify(200, r#"{"data": {"token": "abc123"}}"#).unwrap();
        assert_eq!(envelope.token().unwrap().as_str(), "abc123");

        let blank = classify(201, r#"{"data": {"token": ""}}"#).unwrap();
        assert!(blank.token().is_none());
        assert!(classify(201, "").unwrap().token().is_none());
    }
}
