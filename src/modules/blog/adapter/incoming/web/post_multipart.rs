use actix_multipart::{Field, Multipart};
use futures::StreamExt;

use crate::blog::application::domain::media::ImageUpload;
use crate::blog::application::ports::incoming::use_cases::PostForm;
use crate::shared::forms::checkbox;

/// Text inputs larger than this are refused outright.
pub const TEXT_FIELD_LIMIT: usize = 64 * 1024;

pub const IMAGE_FIELD: &str = "image";
pub const IMAGE_CLEAR_FIELD: &str = "image-clear";

#[derive(Debug, thiserror::Error)]
pub enum PostPayloadError {
    #[error("Malformed multipart payload: {0}")]
    Multipart(String),

    #[error("Field {0} is too large")]
    FieldTooLarge(String),
}

/// A submitted post form plus the uploaded image, if a file was chosen.
#[derive(Debug, Default)]
pub struct PostSubmission {
    pub form: PostForm,
    pub image: Option<ImageUpload>,
}

/// Reads the post form from `multipart/form-data`.
///
/// Image bytes beyond `max_image_bytes` are counted but not kept, so the size
/// check downstream still sees the real upload size.
pub async fn read_post_submission(
    mut payload: Multipart,
    max_image_bytes: u64,
) -> Result<PostSubmission, PostPayloadError> {
    let mut form = PostForm {
        is_published: false,
        ..PostForm::default()
    };
    let mut image = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| PostPayloadError::Multipart(e.to_string()))?;
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            image = read_upload(&mut field, max_image_bytes).await?;
            continue;
        }

        let value = read_text(&mut field, &name).await?;
        match name.as_str() {
            "title" => form.title = value,
            "text" => form.text = value,
            "pub_date" => form.pub_date = value,
            "location" => form.location = value,
            "category" => form.category = value,
            "is_published" => form.is_published = checkbox(Some(&value)),
            IMAGE_CLEAR_FIELD => form.image_clear = checkbox(Some(&value)),
            _ => {}
        }
    }

    Ok(PostSubmission { form, image })
}

async fn read_text(field: &mut Field, name: &str) -> Result<String, PostPayloadError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| PostPayloadError::Multipart(e.to_string()))?;
        if bytes.len() + chunk.len() > TEXT_FIELD_LIMIT {
            return Err(PostPayloadError::FieldTooLarge(name.to_string()));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `None` when the file input was left empty.
async fn read_upload(
    field: &mut Field,
    max_bytes: u64,
) -> Result<Option<ImageUpload>, PostPayloadError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or_default()
        .to_string();
    let content_type = field
        .content_type()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default();

    let mut bytes = Vec::new();
    let mut size: u64 = 0;
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| PostPayloadError::Multipart(e.to_string()))?;
        size += chunk.len() as u64;
        if size <= max_bytes {
            bytes.extend_from_slice(&chunk);
        }
    }

    if file_name.is_empty() && size == 0 {
        return Ok(None);
    }

    Ok(Some(ImageUpload {
        file_name,
        content_type,
        size,
        bytes,
    }))
}
