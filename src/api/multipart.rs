//! Multipart bodies for post creation.
//!
//! The body is described as plain data first and only turned into a
//! `reqwest` form when the request is sent, so its layout can be inspected.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use super::error::{ApiError, ApiResult, Field};

/// Form field carrying the post caption.
pub const CAPTION_FIELD: &str = "content";
/// Form field carrying each image.
pub const IMAGE_FIELD: &str = "images";

/// An image picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl ImageAttachment {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Read an image from disk, inferring its content type from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let content_type = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "heic" => "image/heic",
            _ => "application/octet-stream",
        };
        Ok(Self::new(bytes, content_type))
    }

    /// File extension matching the content type.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/heic" => "heic",
            _ => "bin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FormPart::File { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartBody {
    parts: Vec<FormPart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }

    /// Caption plus images, the latter named `image_1.<ext>`, `image_2.<ext>`, ...
    pub fn for_post(caption: &str, images: &[ImageAttachment]) -> Self {
        images.iter().enumerate().fold(
            Self::new().text(CAPTION_FIELD, caption),
            |body, (i, image)| {
                body.file(
                    IMAGE_FIELD,
                    format!("image_{}.{}", i + 1, image.extension()),
                    image.content_type.clone(),
                    image.bytes.clone(),
                )
            },
        )
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn file_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_file()).count()
    }

    pub(crate) fn into_form(self) -> ApiResult<Form> {
        self.parts.into_iter().try_fold(Form::new(), |form, part| match part {
            FormPart::Text { name, value } => Ok(form.text(name, value)),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| {
                        ApiError::validation(Field::Content, format!("Tipo de archivo no válido: {}", e))
                    })?;
                Ok(form.part(name, part))
            }
        })
    }
}
