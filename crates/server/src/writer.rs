//! Snapshot + jobs persistence for the alumni update flow.
//!
//! One snapshot row is inserted per accepted update, columns driven by the
//! field schema in `alumni_core::schema`, then any parsed job entries are
//! inserted in a single batched statement tagged with the new snapshot id.
//! Both inserts run inside one transaction, so a jobs failure rolls the
//! snapshot back instead of leaving a half-written edit behind.

use serde::Deserialize;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::warn;

use alumni_core::schema::{FieldDefault, EDITABLE_FIELDS};

use crate::intake::UploadForm;

/// One entry of the `jobs` form field. Unknown keys are ignored; every known
/// key is optional.
#[derive(Debug, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub job_position: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub responsibility: Option<String>,
}

#[derive(Debug)]
pub struct UpdateOutcome {
    pub snapshot_id: i64,
    pub job_count: usize,
}

impl UpdateOutcome {
    pub fn message(&self) -> &'static str {
        if self.job_count == 0 {
            "Alumni saved (no jobs)"
        } else {
            "Alumni and jobs saved successfully"
        }
    }
}

/// Parse the optional `jobs` field. Malformed JSON degrades to an empty list
/// with a logged warning; it never fails the request.
pub fn parse_jobs(raw: Option<&str>) -> Vec<JobInput> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<JobInput>>(raw) {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!("Failed to parse jobs JSON: {} — saving without jobs", e);
            Vec::new()
        }
    }
}

fn blank_to_null(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(String::from)
}

/// Column value for one editable field: stored file path, then non-empty text
/// field, then the schema default.
fn resolve_field(form: &UploadForm, name: &str, default: FieldDefault) -> Option<String> {
    match form.value_of(name) {
        Some(v) => Some(v.to_string()),
        None => match default {
            FieldDefault::Null => None,
            FieldDefault::No => Some("No".to_string()),
        },
    }
}

/// Insert the snapshot and its job entries for canonical record
/// `transcript_id`, inside one transaction.
pub async fn persist_update(
    pool: &PgPool,
    transcript_id: i64,
    form: &UploadForm,
) -> Result<UpdateOutcome, sqlx::Error> {
    let jobs = parse_jobs(form.fields.get("jobs").map(String::as_str));

    let mut tx = pool.begin().await?;

    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO alumni_infos_modified (transcript_id");
    for spec in EDITABLE_FIELDS {
        qb.push(", ");
        qb.push(spec.name);
    }
    qb.push(", created_at, updated_at) VALUES (");
    {
        let mut vals = qb.separated(", ");
        vals.push_bind(transcript_id);
        for spec in EDITABLE_FIELDS {
            vals.push_bind(resolve_field(form, spec.name, spec.default));
        }
        vals.push("now()");
        vals.push("now()");
    }
    qb.push(") RETURNING id");

    let (snapshot_id,): (i64,) = qb.build_query_as().fetch_one(&mut *tx).await?;

    if !jobs.is_empty() {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO alumni_job_details_modified \
             (alumni_modified_id, company_name, company_address, job_position, \
              start_date, end_date, department, responsibility, created_at, updated_at) ",
        );
        qb.push_values(&jobs, |mut b, job| {
            b.push_bind(snapshot_id)
                .push_bind(blank_to_null(&job.company_name))
                .push_bind(blank_to_null(&job.company_address))
                .push_bind(blank_to_null(&job.job_position))
                .push_bind(blank_to_null(&job.start_date))
                .push_bind(blank_to_null(&job.end_date))
                .push_bind(blank_to_null(&job.department))
                .push_bind(blank_to_null(&job.responsibility))
                .push("now()")
                .push("now()");
        });
        qb.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;

    Ok(UpdateOutcome {
        snapshot_id,
        job_count: jobs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jobs_well_formed() {
        let raw = r#"[
            {"company_name":"Acme","job_position":"Engineer","start_date":"2020-01-01"},
            {"company_name":"Globex","department":"R&D"},
            {"company_name":"Initech","responsibility":"Reports"}
        ]"#;
        let jobs = parse_jobs(Some(raw));
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].company_name.as_deref(), Some("Acme"));
        assert_eq!(jobs[0].job_position.as_deref(), Some("Engineer"));
        assert_eq!(jobs[1].department.as_deref(), Some("R&D"));
        assert!(jobs[1].job_position.is_none());
    }

    #[test]
    fn test_parse_jobs_invalid_json_degrades_to_empty() {
        assert!(parse_jobs(Some("{not json")).is_empty());
        // Valid JSON, wrong shape
        assert!(parse_jobs(Some(r#"{"company_name":"Acme"}"#)).is_empty());
    }

    #[test]
    fn test_parse_jobs_absent_or_empty() {
        assert!(parse_jobs(None).is_empty());
        assert!(parse_jobs(Some("")).is_empty());
        assert!(parse_jobs(Some("[]")).is_empty());
    }

    #[test]
    fn test_parse_jobs_ignores_unknown_keys() {
        let jobs = parse_jobs(Some(r#"[{"company_name":"Acme","salary":"high"}]"#));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_outcome_messages() {
        let none = UpdateOutcome {
            snapshot_id: 1,
            job_count: 0,
        };
        let some = UpdateOutcome {
            snapshot_id: 1,
            job_count: 3,
        };
        assert_eq!(none.message(), "Alumni saved (no jobs)");
        assert_eq!(some.message(), "Alumni and jobs saved successfully");
    }

    #[test]
    fn test_resolve_field_defaults() {
        let form = UploadForm::default();
        assert_eq!(resolve_field(&form, "remarks", FieldDefault::Null), None);
        assert_eq!(
            resolve_field(&form, "job_seeker", FieldDefault::No),
            Some("No".to_string())
        );
    }

    #[test]
    fn test_resolve_field_prefers_file_path() {
        let mut form = UploadForm::default();
        form.fields
            .insert("image_url".into(), "from-text".into());
        form.files
            .insert("image_url".into(), "/assets/image_url-1-2.png".into());
        assert_eq!(
            resolve_field(&form, "image_url", FieldDefault::Null),
            Some("/assets/image_url-1-2.png".to_string())
        );
    }

    #[test]
    fn test_blank_to_null() {
        assert_eq!(blank_to_null(&Some(String::new())), None);
        assert_eq!(blank_to_null(&None), None);
        assert_eq!(blank_to_null(&Some("x".into())), Some("x".to_string()));
    }
}
