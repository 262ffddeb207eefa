//! Declarative schema for the alumni snapshot form.
//!
//! A single source of truth for every editable snapshot field (name plus
//! default) and for the upload allow-list (field name plus permitted MIME
//! types). File intake and the record writer both consult this table instead
//! of carrying their own per-field special cases.

/// Default applied when a form field is absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Store SQL NULL.
    Null,
    /// Yes/no flag, stored as the literal string "No".
    No,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name in `alumni_infos_modified` and form field name.
    pub name: &'static str,
    pub default: FieldDefault,
}

const fn field(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        default: FieldDefault::Null,
    }
}

const fn flag(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        default: FieldDefault::No,
    }
}

/// Every editable snapshot column, in insert order.
pub const EDITABLE_FIELDS: &[FieldSpec] = &[
    field("name"),
    field("regcode"),
    field("batch"),
    field("passing_year"),
    field("department"),
    field("email"),
    field("phone_no"),
    field("dob"),
    field("mailing_address"),
    field("permanent_address"),
    field("image_url"),
    field("linkedin_link"),
    field("facebook_link"),
    field("instagram_link"),
    field("twitter_link"),
    field("short_interview_video"),
    flag("helping_alumni"),
    flag("job_seeker"),
    flag("interested_to_join_reunion"),
    flag("interested_to_form_club"),
    field("cv_or_resume"),
    field("higher_studies"),
    field("remarks"),
];

// ── Upload allow-list ────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct UploadFieldSpec {
    pub name: &'static str,
    pub allowed_mime: &'static [&'static str],
}

const IMAGE_MIME: &[&str] = &["image/jpeg", "image/png"];
const VIDEO_MIME: &[&str] = &["video/mp4", "video/quicktime"];
const PDF_MIME: &[&str] = &["application/pdf"];
const IMAGE_OR_VIDEO_MIME: &[&str] =
    &["image/jpeg", "image/png", "video/mp4", "video/quicktime"];

/// The four multipart fields allowed to carry a file, and what they may carry.
pub const UPLOAD_FIELDS: &[UploadFieldSpec] = &[
    UploadFieldSpec {
        name: "short_interview_video",
        allowed_mime: VIDEO_MIME,
    },
    UploadFieldSpec {
        name: "image_url",
        allowed_mime: IMAGE_MIME,
    },
    UploadFieldSpec {
        name: "cv_or_resume",
        allowed_mime: PDF_MIME,
    },
    UploadFieldSpec {
        name: "memories_at_diu",
        allowed_mime: IMAGE_OR_VIDEO_MIME,
    },
];

/// Allowed MIME set for an upload field, or None if the field may not carry a file.
pub fn allowed_mime_for(field: &str) -> Option<&'static [&'static str]> {
    UPLOAD_FIELDS
        .iter()
        .find(|spec| spec.name == field)
        .map(|spec| spec.allowed_mime)
}

/// True if `mime` is acceptable for the named upload field.
pub fn mime_allowed(field: &str, mime: &str) -> bool {
    allowed_mime_for(field).is_some_and(|set| set.contains(&mime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_field_count_and_flags() {
        assert_eq!(EDITABLE_FIELDS.len(), 23);
        let flags: Vec<&str> = EDITABLE_FIELDS
            .iter()
            .filter(|f| f.default == FieldDefault::No)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            flags,
            vec![
                "helping_alumni",
                "job_seeker",
                "interested_to_join_reunion",
                "interested_to_form_club",
            ]
        );
    }

    #[test]
    fn test_upload_fields_are_also_editable() {
        // Every upload field must map onto a snapshot column.
        for spec in UPLOAD_FIELDS {
            if spec.name == "memories_at_diu" {
                // Memories uploads are kept on disk only; no dedicated column.
                continue;
            }
            assert!(
                EDITABLE_FIELDS.iter().any(|f| f.name == spec.name),
                "upload field '{}' has no snapshot column",
                spec.name
            );
        }
    }

    #[test]
    fn test_mime_allowed() {
        assert!(mime_allowed("image_url", "image/png"));
        assert!(mime_allowed("image_url", "image/jpeg"));
        assert!(!mime_allowed("image_url", "text/plain"));
        assert!(!mime_allowed("image_url", "application/pdf"));

        assert!(mime_allowed("cv_or_resume", "application/pdf"));
        assert!(!mime_allowed("cv_or_resume", "image/png"));

        assert!(mime_allowed("short_interview_video", "video/quicktime"));
        assert!(!mime_allowed("short_interview_video", "image/png"));

        assert!(mime_allowed("memories_at_diu", "video/mp4"));
        assert!(mime_allowed("memories_at_diu", "image/jpeg"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(allowed_mime_for("resume").is_none());
        assert!(!mime_allowed("resume", "application/pdf"));
    }
}
