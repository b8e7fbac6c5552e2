//! GitHub workflow context

use crate::command::builder::non_blank;
use crate::error::{Error, Result};
use serde::Serialize;

/// Subset of the GitHub Actions run context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubContext {
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub repository: Option<String>,
    pub actor: Option<String>,
    pub event_name: Option<String>,
    pub workflow: Option<String>,
    pub run_id: Option<String>,
}

impl GitHubContext {
    /// Short branch or tag name of `ref`
    pub fn ref_name(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .or_else(|| self.git_ref.strip_prefix("refs/tags/"))
            .unwrap_or(&self.git_ref)
    }
}

/// Collects context fields; `sha` and `ref` are checked only at `build()`
#[derive(Debug, Clone, Default)]
pub struct GitHubContextBuilder {
    sha: Option<String>,
    git_ref: Option<String>,
    repository: Option<String>,
    actor: Option<String>,
    event_name: Option<String>,
    workflow: Option<String>,
    run_id: Option<String>,
}

impl GitHubContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the `GITHUB_*` variables set on Actions runners
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Seed from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).and_then(|value| non_blank(&value));
        Self {
            sha: get("GITHUB_SHA"),
            git_ref: get("GITHUB_REF"),
            repository: get("GITHUB_REPOSITORY"),
            actor: get("GITHUB_ACTOR"),
            event_name: get("GITHUB_EVENT_NAME"),
            workflow: get("GITHUB_WORKFLOW"),
            run_id: get("GITHUB_RUN_ID"),
        }
    }

    pub fn with_sha(mut self, sha: impl AsRef<str>) -> Self {
        self.sha = non_blank(sha.as_ref());
        self
    }

    pub fn with_ref(mut self, git_ref: impl AsRef<str>) -> Self {
        self.git_ref = non_blank(git_ref.as_ref());
        self
    }

    pub fn with_repository(mut self, repository: impl AsRef<str>) -> Self {
        self.repository = non_blank(repository.as_ref());
        self
    }

    pub fn with_actor(mut self, actor: impl AsRef<str>) -> Self {
        self.actor = non_blank(actor.as_ref());
        self
    }

    pub fn with_event_name(mut self, event_name: impl AsRef<str>) -> Self {
        self.event_name = non_blank(event_name.as_ref());
        self
    }

    pub fn with_workflow(mut self, workflow: impl AsRef<str>) -> Self {
        self.workflow = non_blank(workflow.as_ref());
        self
    }

    pub fn with_run_id(mut self, run_id: impl AsRef<str>) -> Self {
        self.run_id = non_blank(run_id.as_ref());
        self
    }

    pub fn build(&self) -> Result<GitHubContext> {
        let sha = self
            .sha
            .clone()
            .ok_or_else(|| Error::InvalidContext("missing sha".to_string()))?;
        let git_ref = self
            .git_ref
            .clone()
            .ok_or_else(|| Error::InvalidContext("missing ref".to_string()))?;

        Ok(GitHubContext {
            sha,
            git_ref,
            repository: self.repository.clone(),
            actor: self.actor.clone(),
            event_name: self.event_name.clone(),
            workflow: self.workflow.clone(),
            run_id: self.run_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_build_requires_sha_and_ref() {
        let err = GitHubContextBuilder::new().with_ref("refs/heads/main").build().unwrap_err();
        assert_eq!(err.to_string(), "Invalid GitHub context: missing sha");

        let err = GitHubContextBuilder::new().with_sha("abc").with_ref("  ").build().unwrap_err();
        assert!(matches!(err, Error::InvalidContext(_)));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("GITHUB_SHA", "0123abcd"),
            ("GITHUB_REF", "refs/tags/v1.0.0"),
            ("GITHUB_REPOSITORY", "acme/infra"),
            ("GITHUB_RUN_ID", ""),
        ]
        .into_iter()
        .collect();

        let context = GitHubContextBuilder::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
            .build()
            .unwrap();

        assert_eq!(context.sha, "0123abcd");
        assert_eq!(context.ref_name(), "v1.0.0");
        assert_eq!(context.repository.as_deref(), Some("acme/infra"));
        assert_eq!(context.run_id, None);
    }
}
