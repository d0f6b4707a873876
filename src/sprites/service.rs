use std::{path::PathBuf, time::Duration};

use bytes::Bytes;
use reqwest::StatusCode;
use tokio::time::sleep;
use validator::Validate;

use crate::{
    app::models::api_error::ApiError,
    sprites::{
        apis::gemini,
        models::{
            generated_image::GeneratedImage, run_report::RunReport, sprite_spec::SpriteSpec,
        },
        OUTPUT_DIR, REQUEST_DELAY_MILLIS, RESPONSE_EXCERPT_CHARS,
    },
    AppState,
};

/// One generation attempt per spec, in list order, with a fixed pause between
/// attempts. Per-spec failures are logged and counted, never fatal.
pub async fn run(specs: &[SpriteSpec], state: &AppState) -> Result<RunReport, ApiError> {
    if let Err(e) = validate_specs(specs) {
        return Err(e);
    }

    let output_dir = provide_output_dir(state);
    if let Err(e) = tokio::fs::create_dir_all(&output_dir).await {
        tracing::error!(%e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: [
                "Failed to create output directory ",
                &output_dir.display().to_string(),
                ".",
            ]
            .concat(),
        });
    }

    let request_delay = Duration::from_millis(
        state.envy.request_delay_ms.unwrap_or(REQUEST_DELAY_MILLIS),
    );

    let mut succeeded: u32 = 0;
    let mut failed: u32 = 0;

    for (i, spec) in specs.iter().enumerate() {
        println!("Generating: {}", spec.name);

        match generate_one(spec, state).await {
            true => succeeded += 1,
            false => failed += 1,
        }

        if i + 1 < specs.len() {
            sleep(request_delay).await;
        }
    }

    Ok(RunReport { succeeded, failed })
}

/// Returns true only if the decoded payload reached disk.
pub async fn generate_one(spec: &SpriteSpec, state: &AppState) -> bool {
    match gemini::service::generate_content(&spec.prompt, state).await {
        Ok(response) => {
            let Some(inline_data) = response.first_inline_image()
            else {
                println!(
                    "Warning: no image in response for {} ({})",
                    spec.name,
                    response.text_excerpt(RESPONSE_EXCERPT_CHARS)
                );
                return false;
            };

            let Ok(bytes) = base64::decode(&inline_data.data)
            else {
                println!("Warning: could not decode image data for {}.", spec.name);
                return false;
            };

            // The payload is written as returned; the provider is trusted.
            let image = GeneratedImage {
                mime_type: inline_data.mime_type.parse().unwrap_or(mime::IMAGE_PNG),
                data: Bytes::from(bytes),
            };

            let path = provide_output_dir(state).join(&spec.filename);
            match tokio::fs::write(&path, &image.data).await {
                Ok(_) => {
                    tracing::debug!(
                        "wrote {} bytes ({}) for {}",
                        image.data.len(),
                        image.mime_type,
                        spec.name
                    );
                    println!("Saved: {}", path.display());
                    true
                }
                Err(e) => {
                    tracing::error!(%e);
                    println!("Warning: failed to save {}.", path.display());
                    false
                }
            }
        }
        Err(e) => {
            println!("Warning: failed to generate {}: {}", spec.name, e.message);
            false
        }
    }
}

pub fn provide_output_dir(state: &AppState) -> PathBuf {
    match &state.envy.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(OUTPUT_DIR),
    }
}

pub fn validate_specs(specs: &[SpriteSpec]) -> Result<(), ApiError> {
    let mut names: Vec<&str> = Vec::new();
    let mut filenames: Vec<&str> = Vec::new();

    for spec in specs {
        if let Err(e) = spec.validate() {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: [&spec.name, ": ", &e.to_string()].concat(),
            });
        }

        if names.contains(&spec.name.as_str()) {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: ["Duplicate name in sprite list: ", &spec.name, "."].concat(),
            });
        }

        if filenames.contains(&spec.filename.as_str()) {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: ["Duplicate filename in sprite list: ", &spec.filename, "."].concat(),
            });
        }

        names.push(&spec.name);
        filenames.push(&spec.filename);
    }

    Ok(())
}
