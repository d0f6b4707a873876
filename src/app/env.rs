use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,

    pub gemini_api_key: String,

    pub output_dir: Option<String>,
    pub generation_api_url: Option<String>,
    pub request_delay_ms: Option<u64>,
}
