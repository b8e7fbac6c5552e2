use serde::Serialize;

/// Terragrunt-only settings layered on top of an [`IacConfig`](super::IacConfig)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TerragruntOptions {
    pub(crate) run_all: bool,
    pub(crate) config_path: Option<String>,
    pub(crate) working_dir: Option<String>,
    pub(crate) non_interactive: bool,
    pub(crate) no_auto_init: bool,
    pub(crate) no_auto_retry: bool,
    pub(crate) parallelism: Option<u32>,
    pub(crate) include_dirs: Vec<String>,
    pub(crate) exclude_dirs: Vec<String>,
    pub(crate) ignore_dependency_errors: bool,
    pub(crate) ignore_external_dependencies: bool,
    pub(crate) include_external_dependencies: bool,
    pub(crate) source: Option<String>,
    pub(crate) source_map: Vec<(String, String)>,
    pub(crate) download_dir: Option<String>,
    pub(crate) iam_role: Option<String>,
    pub(crate) iam_role_session_name: Option<String>,
    pub(crate) strict_include: bool,
}

impl TerragruntOptions {
    pub fn run_all(&self) -> bool {
        self.run_all
    }

    /// Value of `--terragrunt-config`
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// Value of `--terragrunt-working-dir`
    pub fn working_dir(&self) -> Option<&str> {
        self.working_dir.as_deref()
    }

    pub fn non_interactive(&self) -> bool {
        self.non_interactive
    }

    pub fn no_auto_init(&self) -> bool {
        self.no_auto_init
    }

    pub fn no_auto_retry(&self) -> bool {
        self.no_auto_retry
    }

    pub fn parallelism(&self) -> Option<u32> {
        self.parallelism
    }

    pub fn include_dirs(&self) -> &[String] {
        &self.include_dirs
    }

    pub fn exclude_dirs(&self) -> &[String] {
        &self.exclude_dirs
    }

    pub fn ignore_dependency_errors(&self) -> bool {
        self.ignore_dependency_errors
    }

    pub fn ignore_external_dependencies(&self) -> bool {
        self.ignore_external_dependencies
    }

    pub fn include_external_dependencies(&self) -> bool {
        self.include_external_dependencies
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn source_map(&self) -> &[(String, String)] {
        &self.source_map
    }

    pub fn download_dir(&self) -> Option<&str> {
        self.download_dir.as_deref()
    }

    pub fn iam_role(&self) -> Option<&str> {
        self.iam_role.as_deref()
    }

    pub fn iam_role_session_name(&self) -> Option<&str> {
        self.iam_role_session_name.as_deref()
    }

    pub fn strict_include(&self) -> bool {
        self.strict_include
    }
}
