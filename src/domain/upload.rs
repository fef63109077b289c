pub const DEFAULT_FILENAME: &str = "audio.mp3";
pub const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// Audio bytes submitted by a caller, held only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    data: Vec<u8>,
    filename: String,
    content_type: String,
}

impl Upload {
    pub fn new(data: Vec<u8>, filename: Option<String>, content_type: Option<String>) -> Self {
        Self {
            data,
            filename: filename
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
            content_type: content_type
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
