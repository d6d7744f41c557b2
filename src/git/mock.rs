use crate::error::{CzEmojiError, Result};
use crate::git::{CommitInfo, Repository};
use git2::Oid;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    commits: Vec<(Oid, CommitInfo)>,
    tags: HashMap<String, Oid>,
    created: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            created: RefCell::new(Vec::new()),
        }
    }

    /// Append a commit; later commits sit on top of earlier ones
    pub fn add_commit(&mut self, oid: Oid, info: CommitInfo) {
        self.commits.push((oid, info));
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Messages passed to `create_commit`, in call order
    pub fn created_messages(&self) -> Vec<String> {
        self.created.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.commits
            .last()
            .map(|(oid, _)| *oid)
            .ok_or_else(|| CzEmojiError::Git(git2::Error::from_str("reference 'HEAD' not found")))
    }

    fn get_commits_between(&self, from_oid: Option<Oid>, to_oid: Oid) -> Result<Vec<CommitInfo>> {
        let start = match from_oid {
            Some(from) => self
                .commits
                .iter()
                .position(|(oid, _)| *oid == from)
                .map_or(0, |index| index + 1),
            None => 0,
        };
        let end = self
            .commits
            .iter()
            .position(|(oid, _)| *oid == to_oid)
            .map_or(self.commits.len(), |index| index + 1);

        Ok(self
            .commits
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|(_, info)| info.clone())
            .collect())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.get(tag_name).copied())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self.tags.keys().cloned().collect();
        tags.sort();
        Ok(tags)
    }

    fn create_commit(&self, message: &str) -> Result<Oid> {
        let mut created = self.created.borrow_mut();
        created.push(message.to_string());
        Ok(Oid::hash_object(git2::ObjectType::Blob, message.as_bytes())?)
    }
}
