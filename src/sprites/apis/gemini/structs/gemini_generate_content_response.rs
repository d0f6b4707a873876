use mime::Mime;
use serde::Deserialize;

use crate::app::util::text;

// Every layer is optional: blocked prompts come back as 200s with no
// candidates at all, and text-only answers carry no inline data.
#[derive(Debug, Deserialize)]
pub struct GeminiGenerateContentResponse {
    pub candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidateContent {
    pub parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiPart {
    pub text: Option<String>,
    #[serde(rename(deserialize = "inlineData"))]
    pub inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiInlineData {
    #[serde(rename(deserialize = "mimeType"))]
    pub mime_type: String,
    pub data: String,
}

impl GeminiGenerateContentResponse {
    /// First part carrying inline data with an image mime type, scanning
    /// candidates in order and parts in order.
    pub fn first_inline_image(&self) -> Option<&GeminiInlineData> {
        let Some(candidates) = &self.candidates
        else {
            return None;
        };

        for candidate in candidates {
            let Some(content) = &candidate.content
            else {
                continue;
            };

            let Some(parts) = &content.parts
            else {
                continue;
            };

            for part in parts {
                let Some(inline_data) = &part.inline_data
                else {
                    continue;
                };

                let Ok(mime_type) = inline_data.mime_type.parse::<Mime>()
                else {
                    continue;
                };

                if mime_type.type_() == mime::IMAGE {
                    return Some(inline_data);
                }
            }
        }

        None
    }

    /// Flattened text parts for warning lines, truncated to max_chars.
    pub fn text_excerpt(&self, max_chars: usize) -> String {
        let mut excerpt = String::new();

        if let Some(candidates) = &self.candidates {
            for candidate in candidates {
                let Some(content) = &candidate.content
                else {
                    continue;
                };

                let Some(parts) = &content.parts
                else {
                    continue;
                };

                for part in parts {
                    let Some(part_text) = &part.text
                    else {
                        continue;
                    };

                    if !excerpt.is_empty() {
                        excerpt.push(' ');
                    }

                    excerpt.push_str(&part_text.trim().replace("\n", " ").replace("\r", ""));
                }
            }
        }

        if excerpt.is_empty() {
            return "no text in response".to_string();
        }

        text::truncate_chars(&excerpt, max_chars)
    }
}
