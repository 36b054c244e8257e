//! HTTP boundary: request wrapper, response envelope and error taxonomy.

mod client;
mod envelope;
mod error;
mod multipart;

pub use client::{ApiClient, ApiRequest, RequestBody};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult, ErrorKind, Field};
pub use multipart::{FormPart, ImageAttachment, MultipartBody, CAPTION_FIELD, IMAGE_FIELD};
