use reqwest::StatusCode;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}
