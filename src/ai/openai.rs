use crate::ai::http::{handle_request_error, status_error};
use crate::ai::{AiError, REASONING_EFFORT};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::{env, error::Error};

/// Minimal typed view of a chat-completions response. Fields are optional or
/// defaulted so a slightly different provider schema still deserializes.
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ChatMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for the OpenAI chat-completions endpoint.
#[derive(Debug)]
pub struct OpenAiClient {
    api_key: String,
    org_id: Option<String>,
    base_url: String,
}

impl OpenAiClient {
    /// Build a client from the environment.
    ///
    /// `OPENAI_API_KEY` is required; this is the credential check the rest of
    /// the pipeline relies on, so call it before touching git or the network.
    /// `OPENAI_ORG_ID` and `OPENAI_API_BASE` are optional.
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            AiError::ProviderNotAvailable("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        Ok(Self {
            api_key,
            org_id: env::var("OPENAI_ORG_ID").ok(),
            base_url: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
        })
    }

    /// Reasoning models take a reasoning-effort setting instead of a sampling
    /// temperature, and name their token ceiling differently.
    fn is_reasoning_model(model: &str) -> bool {
        model.starts_with("gpt-5")
            || model.starts_with("o1")
            || model.starts_with("o3")
            || model.starts_with("o4")
    }

    /// Send `prompt` as a single user message and return the first choice's
    /// content, trimmed. One request, no retry, no streaming.
    pub fn complete(
        &self,
        model: &str,
        temperature: f32,
        max_tokens: u32,
        prompt: &str,
    ) -> Result<String, Box<dyn Error>> {
        let client = Client::new();

        let mut body = json!({
            "model": model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });
        if Self::is_reasoning_model(model) {
            body["max_completion_tokens"] = json!(max_tokens);
            body["reasoning_effort"] = json!(REASONING_EFFORT);
        } else {
            body["max_tokens"] = json!(max_tokens);
            body["temperature"] = json!(temperature);
        }

        let mut request = client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json");
        if let Some(org_id) = &self.org_id {
            request = request.header("OpenAI-Organization", org_id.clone());
        }

        let response = request.json(&body).send().map_err(handle_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Box::new(status_error(status.as_u16(), error_text)));
        }

        let completion: ChatCompletion = response.json().map_err(|e| {
            Box::new(AiError::JsonError {
                message: format!("Failed to parse JSON: {}", e),
            }) as Box<dyn Error>
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyCompletion)?;

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serial_test::serial;

    fn setup() -> mockito::ServerGuard {
        let server = Server::new();
        env::set_var("OPENAI_API_KEY", "test-api-key");
        env::set_var("OPENAI_API_BASE", server.url());
        env::remove_var("OPENAI_ORG_ID");
        server
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        env::remove_var("OPENAI_API_KEY");

        let result = OpenAiClient::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err().to_string();
        assert!(error.contains("OPENAI_API_KEY"));
    }

    #[test]
    #[serial]
    fn test_successful_completion_is_trimmed() {
        let mut server = setup();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("Authorization", "Bearer test-api-key")
            .match_header("Content-Type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "temperature": 0.5,
                "max_tokens": 1024
            })))
            .with_status(200)
            .with_body(
                r#"{
                "choices": [
                    {
                        "message": {
                            "role": "assistant",
                            "content": "\n## Summary\nFixes bug X\n"
                        }
                    }
                ]
            }"#,
            )
            .create();

        let client = OpenAiClient::from_env().unwrap();
        let result = client.complete("gpt-4o", 0.5, 1024, "test prompt");
        assert_eq!(result.unwrap(), "## Summary\nFixes bug X");

        mock.assert();
    }

    #[test]
    #[serial]
    fn test_reasoning_model_uses_effort_instead_of_temperature() {
        let mut server = setup();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-5",
                "reasoning_effort": "low",
                "max_completion_tokens": 1024
            })))
            .with_status(200)
            .with_body(
                r#"{
                "choices": [
                    {"message": {"role": "assistant", "content": "ok"}}
                ]
            }"#,
            )
            .create();

        let client = OpenAiClient::from_env().unwrap();
        let result = client.complete("gpt-5", 0.5, 1024, "test prompt");
        assert_eq!(result.unwrap(), "ok");

        mock.assert();
    }

    #[test]
    #[serial]
    fn test_org_header_sent_when_configured() {
        let mut server = setup();
        env::set_var("OPENAI_ORG_ID", "org-123");
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("OpenAI-Organization", "org-123")
            .with_status(200)
            .with_body(
                r#"{
                "choices": [
                    {"message": {"role": "assistant", "content": "ok"}}
                ]
            }"#,
            )
            .create();

        let client = OpenAiClient::from_env().unwrap();
        let result = client.complete("gpt-4o", 0.5, 1024, "test prompt");
        assert!(result.is_ok());

        env::remove_var("OPENAI_ORG_ID");
        mock.assert();
    }

    #[test]
    #[serial]
    fn test_api_error_handling() {
        let mut server = setup();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(400)
            .with_body(
                r#"{
                "error": {
                    "message": "Invalid request parameters",
                    "type": "invalid_request_error"
                }
            }"#,
            )
            .create();

        let client = OpenAiClient::from_env().unwrap();
        let result = client.complete("gpt-4o", 0.5, 1024, "test prompt");
        assert!(result.is_err());
        let error = result.unwrap_err().to_string();
        assert!(error.contains("status 400"));
        assert!(error.contains("Invalid request parameters"));

        mock.assert();
    }

    #[test]
    #[serial]
    fn test_rate_limit_error_message() {
        let mut server = setup();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body("slow down")
            .create();

        let client = OpenAiClient::from_env().unwrap();
        let error = client
            .complete("gpt-4o", 0.5, 1024, "test prompt")
            .unwrap_err()
            .to_string();
        assert!(error.contains("Rate limit exceeded"));

        mock.assert();
    }

    #[test]
    #[serial]
    fn test_empty_choices_is_an_error() {
        let mut server = setup();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices": []}"#)
            .create();

        let client = OpenAiClient::from_env().unwrap();
        let result = client.complete("gpt-4o", 0.5, 1024, "test prompt");
        assert!(result.is_err());
        let error = result.unwrap_err().to_string();
        assert!(error.contains("no message content"));

        mock.assert();
    }
}
