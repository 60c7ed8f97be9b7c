//! HTTP client for the judging collaborator.
//!
//! The judge is an Anthropic-style `/v1/messages` endpoint that receives the
//! reference screenshot as a base64 image block plus a text prompt, and
//! replies with free text expected to embed a JSON verdict. The collector
//! only needs the raw text back; parsing and failure downgrading happen on
//! its side of the boundary.

use anyhow::{Context, Result};
use serde_json::Value;

const ANTHROPIC_VERSION: &str = "2023-06-01";

const JUDGE_SYSTEM_PROMPT: &str = r#"You are an expert UI/UX developer and code reviewer. Your task is to evaluate how well the generated React code matches the original mobile UI screenshot.

You will be provided with:
1. An original mobile UI screenshot
2. Generated React code that attempts to recreate this UI

Evaluate the code on these criteria, each scored 0-10 with a brief explanation:

1. **Element Detection**: Does the code include all major UI components visible in the image? (buttons, text, images, input fields, navigation, etc.)
2. **Structural Accuracy**: Are the elements properly nested and organized? (buttons inside cards, items in lists, proper component hierarchy)
3. **Layout Accuracy**: Does the code structure suggest the correct visual layout? (positioning, spacing, alignment)
4. **Code Quality**: Is the code well-structured, semantic, and following React best practices?
5. **Completeness**: How complete is the implementation? Does it cover all visible functionality?

Also provide an overall score (0-10) and a summary.

Respond in JSON format:
{
    "element_detection": {"score": X, "explanation": "..."},
    "structural_accuracy": {"score": X, "explanation": "..."},
    "layout_accuracy": {"score": X, "explanation": "..."},
    "code_quality": {"score": X, "explanation": "..."},
    "completeness": {"score": X, "explanation": "..."},
    "overall_score": X,
    "summary": "...",
    "strengths": ["...", "..."],
    "weaknesses": ["...", "..."]
}"#;

/// Everything the judge needs to score one (image, artifact) pair.
#[derive(Debug, Clone)]
pub struct JudgeRequest<'a> {
    pub image_base64: &'a str,
    pub image_mime_type: &'a str,
    pub image_name: &'a str,
    pub generated_code: &'a str,
    pub model_label: &'a str,
}

/// The judging collaborator boundary: one request in, raw response text out.
pub trait JudgeClient {
    fn model_name(&self) -> &str;

    fn judge(
        &self,
        request: JudgeRequest<'_>,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Judge backed by an Anthropic messages endpoint.
pub struct AnthropicJudge {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl AnthropicJudge {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f64,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }
}

pub fn build_user_prompt(image_name: &str, model_label: &str, generated_code: &str) -> String {
    format!(
        r#"Please evaluate how well this React code matches the provided mobile UI screenshot.

Image: {image_name}
Generated by: {model_label}

Generated React Code:
```jsx
{generated_code}
```

Please provide your evaluation in the specified JSON format."#
    )
}

impl JudgeClient for AnthropicJudge {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn judge(&self, request: JudgeRequest<'_>) -> Result<String> {
        let prompt = build_user_prompt(
            request.image_name,
            request.model_label,
            request.generated_code,
        );

        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "system": JUDGE_SYSTEM_PROMPT,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": request.image_mime_type,
                                "data": request.image_base64
                            }
                        },
                        {
                            "type": "text",
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.api_base))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .context("Failed to call judge API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Judge API request failed: {} - {}", status, error_text);
        }

        let response_json: Value = response
            .json()
            .await
            .context("Failed to parse judge API response")?;

        let content = response_json
            .get("content")
            .and_then(|c| c.as_array())
            .context("Invalid judge API response format")?;

        let text: String = content
            .iter()
            .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
            .collect();

        Ok(text)
    }
}
