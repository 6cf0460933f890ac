use reqwest::multipart::{Form, Part};

/// A book file to add to the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBook {
    pub title: String,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadBook {
    /// Package the upload as a multipart form with a `title` text part and a
    /// `file` part.
    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        let mut file = Part::bytes(self.data).file_name(self.file_name);
        if let Some(mime_type) = self.mime_type.filter(|m| !m.is_empty()) {
            file = file.mime_str(&mime_type)?;
        }
        Ok(Form::new().text("title", self.title).part("file", file))
    }
}
