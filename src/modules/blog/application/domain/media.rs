/// Post images live under this directory of the media root.
pub const POST_IMAGE_DIR: &str = "post_images";

#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    /// Bytes received, which may exceed `bytes.len()` when the reader gave up early.
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Lowercase extension taken from the file name, else from the content type.
    pub fn extension(&self) -> &str {
        let from_name = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        match from_name {
            Some(ext) if ext.eq_ignore_ascii_case("jpeg") || ext.eq_ignore_ascii_case("jpg") => "jpg",
            Some(ext) if ext.eq_ignore_ascii_case("png") => "png",
            Some(ext) if ext.eq_ignore_ascii_case("gif") => "gif",
            Some(ext) if ext.eq_ignore_ascii_case("webp") => "webp",
            _ => match self.content_type.as_str() {
                "image/png" => "png",
                "image/gif" => "gif",
                "image/webp" => "webp",
                _ => "jpg",
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImagePolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

impl ImagePolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/gif", "image/webp"];

    /// Returns the message to show under the image field, if any.
    pub fn check(&self, upload: &ImageUpload) -> Result<(), String> {
        if upload.size == 0 {
            return Err("The submitted file is empty.".to_string());
        }
        if upload.size > self.max_file_size_bytes {
            return Err(format!(
                "The image is too large. It must be at most {} MB.",
                self.max_file_size_bytes / (1024 * 1024)
            ));
        }
        if !self.allowed_mime_types.contains(&upload.content_type.as_str()) {
            return Err(
                "Upload a valid image. The file you uploaded was either not an image or a corrupted image."
                    .to_string(),
            );
        }
        Ok(())
    }
}
