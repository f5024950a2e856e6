//! Directory and file naming for uploads.
//!
//! Files land in `<grp>/<year>/[<semester>/]<subject>/<paper_id>/` below the
//! upload root; the semester level is omitted for `NA`.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use pqphub_entity::Paper;
use pqphub_entity::subject::SEMESTER_NA;

/// Length of the random part of a stored filename.
const RANDOM_SUFFIX_LEN: usize = 6;

/// Replace every character outside `[A-Za-z0-9-_.]` with `_`.
///
/// Empty results and the relative components `.`/`..` become `_`.
pub fn sanitize_segment(value: &str) -> String {
    let cleaned: String = value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Directory for a paper's files, relative to the upload root.
pub fn paper_dir(paper: &Paper) -> PathBuf {
    let mut dir = PathBuf::new();
    dir.push(sanitize_segment(&paper.grp));
    dir.push(sanitize_segment(&paper.year));
    if !paper.semester.trim().eq_ignore_ascii_case(SEMESTER_NA) {
        dir.push(sanitize_segment(&paper.semester));
    }
    dir.push(sanitize_segment(&paper.subject));
    dir.push(paper.id.to_string());
    dir
}

/// On-disk name for an upload: `<epoch-millis>_<random><.ext>`.
///
/// The extension of the client-supplied name is kept, sanitized.
pub fn stored_filename(original_name: &str) -> String {
    let random: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(RANDOM_SUFFIX_LEN)
        .collect();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", sanitize_segment(ext)))
        .unwrap_or_default();

    format!("{}_{random}{extension}", Utc::now().timestamp_millis())
}
