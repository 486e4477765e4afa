use serde::{Deserialize, Serialize};

/// A single task submission to the hosted runner.
///
/// `input` is the natural-language instruction, `mcp_servers` names the
/// tool servers the platform may dispatch to while executing it. The
/// request is sent as-is as the JSON body of the run call.
#[derive(Serialize, Debug, Clone)]
pub struct RunRequest {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub mcp_servers: Vec<String>,
    pub stream: bool,
}

impl RunRequest {
    /// Create a request for the given instruction. Model and tool servers
    /// are added with the chained setters; streaming is off by default.
    pub fn new<T: Into<String>>(input: T) -> Self {
        Self {
            input: input.into(),
            model: None,
            mcp_servers: Vec::new(),
            stream: false,
        }
    }

    pub fn set_model<T: Into<String>>(mut self, model: T) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Declare an MCP server by its platform identifier, e.g.
    /// `"lucharo/mcp-picnic"`. The server runs on the platform side; the
    /// client never connects to it directly.
    pub fn add_mcp_server<T: Into<String>>(mut self, server: T) -> Self {
        self.mcp_servers.push(server.into());
        self
    }

    pub fn set_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

/// The structured response of a finished run.
///
/// Only `final_output` is guaranteed; everything else depends on what the
/// platform chooses to report and unknown fields are ignored.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunResult {
    pub final_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<RunUsage>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_call_shape() {
        let req = RunRequest::new("add olive oil to my cart")
            .set_model("openai/gpt-5")
            .add_mcp_server("lucharo/mcp-picnic");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["input"], "add olive oil to my cart");
        assert_eq!(json["model"], "openai/gpt-5");
        assert_eq!(
            json["mcp_servers"],
            serde_json::json!(["lucharo/mcp-picnic"])
        );
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn model_field_omitted_until_set() {
        let req = RunRequest::new("hi");
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("model").is_none());
    }

    #[test]
    fn result_tolerates_unknown_fields() {
        let raw = r#"{
            "final_output": "Done, 5 items in your cart.",
            "id": "run_123",
            "usage": {"input_tokens": 42, "output_tokens": 7},
            "steps": [{"kind": "tool_call"}]
        }"#;
        let result: RunResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.final_output, "Done, 5 items in your cart.");
        assert_eq!(result.id.as_deref(), Some("run_123"));
        assert_eq!(result.usage.unwrap().input_tokens, Some(42));
    }
}
