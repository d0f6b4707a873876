use regex::Regex;
use validator::ValidationError;

pub mod generated_image;
pub mod run_report;
pub mod sprite_spec;

lazy_static! {
    pub static ref FILENAME_REGEX: Regex = Regex::new(r"^[a-z0-9][a-z0-9._-]*\.png$").unwrap();
}

pub fn validate_filename(value: &str) -> Result<(), ValidationError> {
    match FILENAME_REGEX.is_match(value) {
        true => Ok(()),
        false => Err(ValidationError::new("filename_validation")),
    }
}
