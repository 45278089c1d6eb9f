//! OpenAI Chat Completions API provider.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ChatError;
use crate::types::*;

use super::format::tool_result_to_string;
use super::http::{bearer_headers, build_client, status_to_error};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    model: String,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiProvider {
    pub fn new(
        model: impl Into<String>,
        api_key: String,
        base_url: Option<String>,
    ) -> Result<Self, ChatError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            model: model.into(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: build_client()?,
        })
    }

    fn build_request_body(&self, request: &ProviderRequest) -> Value {
        let messages: Vec<Value> = request.messages.iter().map(message_to_openai).collect();

        let mut body = serde_json::Map::new();
        body.insert("model".into(), self.model.clone().into());
        body.insert("messages".into(), messages.into());

        if let Some(temp) = request.settings.temperature {
            body.insert("temperature".into(), temp.into());
        }

        if let Some(tools) = request.tools.as_ref().filter(|t| !t.is_empty()) {
            let tool_defs: Vec<Value> = tools
                .iter()
                .map(|t| {
                    json!({
                        "type": "function",
                        "function": {
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        }
                    })
                })
                .collect();
            body.insert("tools".into(), tool_defs.into());
        }

        Value::Object(body)
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, ChatError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, messages = request.messages.len(), "OpenAI generate_text");

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let data: OpenAiChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::api(status.as_u16(), "No choices in OpenAI response"))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| AgentToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: serde_json::from_str(&tc.function.arguments)
                    .unwrap_or(Value::String(tc.function.arguments)),
            })
            .collect();

        Ok(ProviderResponse {
            text: choice.message.content.unwrap_or_default(),
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
            tool_calls,
            finish_reason: choice.finish_reason.as_deref().and_then(parse_finish_reason),
        })
    }
}

fn parse_finish_reason(s: &str) -> Option<FinishReason> {
    match s {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "tool_calls" | "function_call" => Some(FinishReason::ToolCalls),
        "content_filter" => Some(FinishReason::ContentFilter),
        _ => None,
    }
}

fn message_to_openai(msg: &ModelMessage) -> Value {
    let role = match msg.role {
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    };

    if let Some(ContentPart::ToolResult(tr)) = msg.content.first() {
        return json!({
            "role": "tool",
            "tool_call_id": tr.tool_call_id,
            "content": tool_result_to_string(&tr.result),
        });
    }

    let text = msg.text_content();
    let tool_calls = msg.tool_calls();
    if tool_calls.is_empty() {
        return json!({ "role": role, "content": text });
    }

    let tc_json: Vec<Value> = tool_calls
        .iter()
        .map(|tc| {
            json!({
                "id": tc.id,
                "type": "function",
                "function": {
                    "name": tc.name,
                    "arguments": tc.arguments.to_string(),
                }
            })
        })
        .collect();
    json!({
        "role": role,
        "content": if text.is_empty() { Value::Null } else { Value::String(text) },
        "tool_calls": tc_json,
    })
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

#[derive(Deserialize)]
struct OpenAiToolCall {
    id: String,
    function: OpenAiFunction,
}

#[derive(Deserialize)]
struct OpenAiFunction {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ToolDefinition;

    fn provider() -> OpenAiProvider {
        OpenAiProvider::new("gpt-3.5-turbo", "sk-test".into(), Some("http://localhost/v1/".into()))
            .expect("client should build")
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        assert_eq!(provider().base_url, "http://localhost/v1");
    }

    #[test]
    fn request_body_includes_temperature_and_tools() {
        let request = ProviderRequest {
            messages: vec![ModelMessage::user("hi")],
            settings: GenerationSettings::builder().temperature(0.0).build(),
            tools: Some(vec![ToolDefinition {
                name: "greet".into(),
                description: "Greets a person with the provided name.".into(),
                parameters: json!({ "type": "object" }),
            }]),
        };

        let body = provider().build_request_body(&request);

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["messages"][0], json!({ "role": "user", "content": "hi" }));
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "greet");
    }

    #[test]
    fn empty_tool_list_is_omitted() {
        let request = ProviderRequest {
            messages: vec![ModelMessage::user("hi")],
            settings: GenerationSettings::default(),
            tools: Some(Vec::new()),
        };
        assert!(provider().build_request_body(&request).get("tools").is_none());
    }

    #[test]
    fn assistant_tool_calls_serialize_with_null_content() {
        let msg = ModelMessage::assistant_with_tool_calls(
            "",
            vec![AgentToolCall {
                id: "call_1".into(),
                name: "weather".into(),
                arguments: json!({ "location": "Paris" }),
            }],
        );

        let value = message_to_openai(&msg);

        assert_eq!(value["role"], "assistant");
        assert!(value["content"].is_null());
        assert_eq!(value["tool_calls"][0]["id"], "call_1");
        assert_eq!(
            value["tool_calls"][0]["function"]["arguments"],
            r#"{"location":"Paris"}"#
        );
    }

    #[test]
    fn tool_results_become_tool_messages() {
        let msg = ModelMessage::tool_result("call_1", json!("sunny"), false);
        assert_eq!(
            message_to_openai(&msg),
            json!({ "role": "tool", "tool_call_id": "call_1", "content": "sunny" })
        );
    }

    #[test]
    fn finish_reasons_are_mapped() {
        assert_eq!(parse_finish_reason("tool_calls"), Some(FinishReason::ToolCalls));
        assert_eq!(parse_finish_reason("stop"), Some(FinishReason::Stop));
        assert_eq!(parse_finish_reason("length"), Some(FinishReason::Length));
        assert_eq!(parse_finish_reason("mystery"), None);
    }
}
