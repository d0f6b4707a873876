pub static API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub static MODEL: &str = "gemini-2.0-flash-preview-image-generation";
