use std::collections::HashMap;
use std::path::Path;

use axum::extract::Multipart;
use tokio::fs;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];

/// An image file received through a multipart form, held in memory until the
/// surrounding record validates.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Drain a multipart request into plain text fields plus at most one image.
pub async fn collect_multipart(
    mut multipart: Multipart,
) -> AppResult<(HashMap<String, String>, Option<UploadedImage>)> {
    let mut fields = HashMap::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !file_name.is_empty() {
                image = Some(UploadedImage {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            fields.insert(name, value);
        }
    }

    Ok((fields, image))
}

fn extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check type and size limits; returns the user-facing message on failure.
pub fn validate_image(image: &UploadedImage) -> Result<(), String> {
    match extension(&image.file_name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err("The image must be a file of type: jpeg, jpg, png.".to_string()),
    }
    if image.bytes.len() > MAX_IMAGE_BYTES {
        return Err("The image may not be greater than 2048 kilobytes.".to_string());
    }
    Ok(())
}

/// Persist an uploaded image under `{storage_dir}/{dir}` with a generated
/// name; returns the stored file name.
pub async fn store_image(
    storage_dir: &str,
    dir: &str,
    image: &UploadedImage,
) -> AppResult<String> {
    let ext = extension(&image.file_name)
        .ok_or_else(|| AppError::BadRequest("image has no extension".into()))?;
    let file_name = format!("{}.{}", Uuid::new_v4(), ext);
    let target_dir = format!("{}/{}", storage_dir, dir);
    fs::create_dir_all(&target_dir)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    fs::write(format!("{}/{}", target_dir, file_name), &image.bytes)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(file_name)
}

/// Remove a stored image; a missing file is logged, not fatal.
pub async fn delete_image(storage_dir: &str, dir: &str, file_name: &str) {
    let path = format!("{}/{}/{}", storage_dir, dir, file_name);
    if let Err(err) = fs::remove_file(&path).await {
        tracing::warn!(error = %err, path = %path, "failed to delete stored image");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, len: usize) -> UploadedImage {
        UploadedImage {
            file_name: name.to_string(),
            bytes: vec![0u8; len],
        }
    }

    #[test]
    fn accepts_allowed_extensions() {
        assert!(validate_image(&image("photo.jpg", 10)).is_ok());
        assert!(validate_image(&image("photo.PNG", 10)).is_ok());
    }

    #[test]
    fn rejects_other_extensions_and_oversize() {
        assert!(validate_image(&image("photo.gif", 10)).is_err());
        assert!(validate_image(&image("photo", 10)).is_err());
        assert!(validate_image(&image("photo.png", MAX_IMAGE_BYTES + 1)).is_err());
    }
}
