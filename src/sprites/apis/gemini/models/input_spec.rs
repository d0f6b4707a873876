use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub contents: Vec<InputContent>,
    #[serde(rename(serialize = "generationConfig"))]
    pub generation_config: InputGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct InputContent {
    pub parts: Vec<InputPart>,
}

#[derive(Debug, Serialize)]
pub struct InputPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct InputGenerationConfig {
    #[serde(rename(serialize = "responseModalities"))]
    pub response_modalities: Vec<String>,
}
