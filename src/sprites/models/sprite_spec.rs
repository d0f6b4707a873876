use serde::{Deserialize, Serialize};
use validator::Validate;

/// One sprite generation request: a prompt and the file it lands in.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SpriteSpec {
    #[validate(length(
        min = 1,
        max = 64,
        message = "name must be between 1 and 64 characters."
    ))]
    pub name: String,
    #[validate(
        length(
            min = 5,
            max = 64,
            message = "filename must be between 5 and 64 characters."
        ),
        custom = "super::validate_filename"
    )]
    pub filename: String,
    #[validate(length(
        min = 1,
        max = 2000,
        message = "prompt must be between 1 and 2000 characters."
    ))]
    pub prompt: String,
}
