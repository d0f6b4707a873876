use reqwest::{header, StatusCode};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

use super::{
    config::{API_URL, MODEL},
    models::input_spec::{InputContent, InputGenerationConfig, InputPart, InputSpec},
    structs::gemini_generate_content_response::GeminiGenerateContentResponse,
};

/// One generateContent call requesting a mixed text/image response.
pub async fn generate_content(
    prompt: &str,
    state: &AppState,
) -> Result<GeminiGenerateContentResponse, ApiError> {
    let input_spec = provide_input_spec(prompt);

    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());
    headers.insert(
        "x-goog-api-key",
        state.envy.gemini_api_key.parse().unwrap(),
    );

    let base_url = state
        .envy
        .generation_api_url
        .as_deref()
        .unwrap_or(API_URL);
    let url = format!("{}/models/{}:generateContent", base_url, MODEL);
    let result = state
        .http
        .post(url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();

            match res.text().await {
                Ok(text) => {
                    if !status.is_success() {
                        tracing::error!(%text);
                        return Err(ApiError {
                            code: status,
                            message: [
                                "Generation request failed with status ",
                                status.as_str(),
                                ".",
                            ]
                            .concat(),
                        });
                    }

                    match serde_json::from_str(&text) {
                        Ok(gemini_generate_content_response) => {
                            Ok(gemini_generate_content_response)
                        }
                        Err(_) => {
                            tracing::error!(%text);
                            Err(DefaultApiError::InternalServerError.value())
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(%e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}

fn provide_input_spec(prompt: &str) -> InputSpec {
    InputSpec {
        contents: vec![InputContent {
            parts: vec![InputPart {
                text: prompt.to_string(),
            }],
        }],
        generation_config: InputGenerationConfig {
            response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
        },
    }
}
