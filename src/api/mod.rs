//! Request and response payloads for the Gemini `streamGenerateContent` API.
//!
//! The streaming endpoint is used in SSE mode (`alt=sse`): each `data:` line
//! carries one [`GenerateContentChunk`] with a partial candidate.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Part {
    pub text: String,
}

#[derive(Serialize, Clone)]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// One harm-category entry of the content-safety policy sent with each request.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

#[derive(Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    #[serde(rename = "safetySettings", skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Deserialize)]
pub struct GenerateContentChunk {
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
    pub role: Option<String>,
}
