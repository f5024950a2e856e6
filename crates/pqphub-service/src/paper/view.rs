//! Paper listing annotated with uploader names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pqphub_core::types::UserId;
use pqphub_entity::{Paper, User};

/// A paper plus the name of whoever uploaded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperView {
    /// The stored paper record.
    #[serde(flatten)]
    pub paper: Paper,
    /// Uploader's name, else email, else raw user id.
    pub uploader: String,
}

impl PaperView {
    /// Join papers against the user list.
    pub fn join(papers: Vec<Paper>, users: &[User]) -> Vec<Self> {
        let by_id: HashMap<UserId, &User> = users.iter().map(|u| (u.id, u)).collect();
        papers
            .into_iter()
            .map(|paper| {
                let uploader = by_id
                    .get(&paper.uploaded_by)
                    .map(|u| u.display_name().to_string())
                    .unwrap_or_else(|| paper.uploaded_by.to_string());
                Self { paper, uploader }
            })
            .collect()
    }
}
