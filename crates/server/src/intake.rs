//! Multipart file intake for the alumni update flow.
//!
//! Walks the multipart stream once. Parts carrying a filename are file parts
//! and must match the upload allow-list in `alumni_core::schema`; any
//! unrecognized file field or disallowed MIME type fails the whole request.
//! Parts without a filename are collected as plain text fields. Accepted
//! files are written under a generated unique name into the assets directory.
//!
//! Validation happens per-part while streaming, so a rejection midway leaves
//! earlier files on disk. Nothing here touches the database, so a rejected
//! request never produces a snapshot row.

use std::collections::HashMap;
use std::path::Path;

use axum::extract::Multipart;
use rand::Rng;
use tokio::fs;
use tracing::info;

use alumni_core::config::ASSETS_PUBLIC_PREFIX;
use alumni_core::schema;
use alumni_core::AlumniError;

/// Result of draining a multipart request: plain text fields plus the public
/// paths of stored files, keyed by field name.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, String>,
}

impl UploadForm {
    /// Value for a snapshot column: a stored file wins over a same-named text
    /// field; empty text counts as absent.
    pub fn value_of(&self, field: &str) -> Option<&str> {
        if let Some(path) = self.files.get(field) {
            return Some(path);
        }
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Generated on-disk name: `{field}-{unix_millis}-{random}{ext}`, original
/// extension preserved. The random suffix keeps same-millisecond uploads from
/// colliding.
pub fn stored_file_name(field: &str, original: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    let ext = Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{field}-{millis}-{suffix}{ext}")
}

/// Drain the multipart stream, validating and storing file parts as they
/// arrive.
pub async fn collect(mut multipart: Multipart, assets_dir: &Path) -> Result<UploadForm, AlumniError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AlumniError::Multipart(e.to_string()))?
    {
        let Some(name) = field.name().map(String::from) else {
            continue;
        };

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);

        match file_name {
            None => {
                // Plain text field.
                let value = field
                    .text()
                    .await
                    .map_err(|e| AlumniError::Multipart(e.to_string()))?;
                form.fields.insert(name, value);
            }
            Some(original) => {
                if schema::allowed_mime_for(&name).is_none() {
                    return Err(AlumniError::UnexpectedFileField(name));
                }
                let mime = content_type.unwrap_or_default();
                if !schema::mime_allowed(&name, &mime) {
                    return Err(AlumniError::InvalidFileType { field: name, mime });
                }

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AlumniError::Multipart(e.to_string()))?;

                let stored = stored_file_name(&name, &original);
                let dest = assets_dir.join(&stored);
                fs::write(&dest, &bytes).await?;

                info!(
                    "Stored upload '{}' ({} bytes) as {}",
                    original,
                    bytes.len(),
                    dest.display()
                );
                form.files
                    .insert(name, format!("{ASSETS_PUBLIC_PREFIX}/{stored}"));
            }
        }
    }

    Ok(form)
}
