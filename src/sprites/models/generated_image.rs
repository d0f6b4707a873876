use bytes::Bytes;
use mime::Mime;

#[derive(Debug)]
pub struct GeneratedImage {
    pub mime_type: Mime,
    pub data: Bytes,
}
