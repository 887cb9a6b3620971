//! HTTP client for communicating with the personas daemon

use anyhow::{Context, Result};
use http_body_util::BodyExt;
use hyper::{Method, Request, StatusCode};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use personas_common::model::Persona;
use serde_json::Value;

/// Default base URL for the personas daemon
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP client for the personas API
pub struct PersonasClient {
    base_url: String,
    client: Client<HttpConnector, String>,
}

impl PersonasClient {
    /// Create a new client against the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    /// Send a request and return the parsed response envelope
    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let uri: hyper::Uri = format!("{}{}", self.base_url, path)
            .parse()
            .context("Invalid request URL")?;

        let mut builder = Request::builder().method(method).uri(uri);
        let body_str = match body {
            Some(value) => {
                builder = builder.header("Content-Type", "application/json");
                serde_json::to_string(value)?
            }
            None => String::new(),
        };

        let req = builder.body(body_str).context("Failed to build request")?;

        let response = self
            .client
            .request(req)
            .await
            .context("Failed to connect to daemon")?;

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .context("Failed to read response body")?
            .to_bytes();

        let envelope: Value = serde_json::from_slice(&body_bytes)
            .with_context(|| format!("Failed to parse JSON response ({})", status))?;

        check_envelope(status, &envelope)?;

        Ok(envelope)
    }

    /// List all personas
    pub async fn list(&self) -> Result<Vec<Persona>> {
        let envelope = self.request(Method::GET, "/personas", None).await?;
        parse_payload(&envelope, "personas")
    }

    /// Get a single persona by id
    pub async fn get(&self, id: i64) -> Result<Persona> {
        let envelope = self
            .request(Method::GET, &format!("/personas/{}", id), None)
            .await?;
        parse_payload(&envelope, "persona")
    }

    /// Create a new persona from a JSON request body
    pub async fn create(&self, body: &Value) -> Result<Persona> {
        let envelope = self.request(Method::POST, "/personas", Some(body)).await?;
        parse_payload(&envelope, "persona")
    }

    /// Partially update an existing persona
    pub async fn update(&self, id: i64, body: &Value) -> Result<Persona> {
        let envelope = self
            .request(Method::PUT, &format!("/personas/{}", id), Some(body))
            .await?;
        parse_payload(&envelope, "persona")
    }

    /// Delete a persona by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.request(Method::DELETE, &format!("/personas/{}", id), None)
            .await?;
        Ok(())
    }
}

impl Default for PersonasClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail with the envelope's error message on a non-success response
fn check_envelope(status: StatusCode, envelope: &Value) -> Result<()> {
    let success = envelope
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success || !status.is_success() {
        let message = envelope
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        anyhow::bail!("Request failed ({}): {}", status, message);
    }

    Ok(())
}

/// Extract and deserialize a payload key from a response envelope
fn parse_payload<T: serde::de::DeserializeOwned>(envelope: &Value, key: &str) -> Result<T> {
    let payload = envelope
        .get(key)
        .cloned()
        .with_context(|| format!("Response envelope is missing the '{}' key", key))?;

    serde_json::from_value(payload)
        .with_context(|| format!("Failed to parse '{}' response payload", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_new() {
        let client = PersonasClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_base_url_trims_trailing_slash() {
        let client = PersonasClient::with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_check_envelope_success() {
        let envelope = json!({"success": true, "personas": []});
        assert!(check_envelope(StatusCode::OK, &envelope).is_ok());
    }

    #[test]
    fn test_check_envelope_error_surfaces_message() {
        let envelope = json!({"success": false, "error": "persona 42 not found"});
        let err = check_envelope(StatusCode::NOT_FOUND, &envelope).unwrap_err();
        assert!(err.to_string().contains("persona 42 not found"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_check_envelope_missing_success_flag() {
        let envelope = json!({"personas": []});
        assert!(check_envelope(StatusCode::OK, &envelope).is_err());
    }

    #[test]
    fn test_parse_payload_personas() {
        let envelope = json!({
            "success": true,
            "personas": [
                {
                    "id": 1,
                    "nombre": "Ana",
                    "apellido": "García",
                    "edad": 31,
                    "email": null,
                    "telefono": null,
                    "direccion": null,
                    "fecha_nacimiento": null
                }
            ]
        });

        let personas: Vec<Persona> = parse_payload(&envelope, "personas").unwrap();
        assert_eq!(personas.len(), 1);
        assert_eq!(personas[0].nombre, "Ana");
    }

    #[test]
    fn test_parse_payload_missing_key() {
        let envelope = json!({"success": true});
        let result: Result<Vec<Persona>> = parse_payload(&envelope, "personas");
        assert!(result.is_err());
    }
}
