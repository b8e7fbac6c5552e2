//! Command enumerations for each supported tool family

crate::command_enum!(
    /// Commands accepted by the Terraform builder
    TerraformCommand, "terraform",
    Init => "init",
    Validate => "validate",
    Fmt => "fmt",
    Plan => "plan",
    Apply => "apply",
    Destroy => "destroy",
    Output => "output",
    Show => "show",
    State => "state",
    Import => "import",
    Refresh => "refresh",
    Taint => "taint",
    Untaint => "untaint",
    Workspace => "workspace",
);

crate::command_enum!(
    /// Commands accepted by the Terragrunt builder: every Terraform command
    /// plus the Terragrunt-only ones
    TerragruntCommand, "terragrunt",
    Init => "init",
    Validate => "validate",
    Fmt => "fmt",
    Plan => "plan",
    Apply => "apply",
    Destroy => "destroy",
    Output => "output",
    Show => "show",
    State => "state",
    Import => "import",
    Refresh => "refresh",
    Taint => "taint",
    Untaint => "untaint",
    Workspace => "workspace",
    RunAll => "run-all",
    GraphDependencies => "graph-dependencies",
    Hclfmt => "hclfmt",
    AwsProviderPatch => "aws-provider-patch",
    RenderJson => "render-json",
    OutputModuleGroups => "output-module-groups",
    ValidateInputs => "validate-inputs",
);

crate::command_enum!(
    /// Commands accepted by `docker buildx imagetools`
    ImageToolsCommand, "imagetools",
    Create => "create",
    Inspect => "inspect",
    Prune => "prune",
);

impl From<TerraformCommand> for TerragruntCommand {
    fn from(command: TerraformCommand) -> Self {
        match command {
            TerraformCommand::Init => TerragruntCommand::Init,
            TerraformCommand::Validate => TerragruntCommand::Validate,
            TerraformCommand::Fmt => TerragruntCommand::Fmt,
            TerraformCommand::Plan => TerragruntCommand::Plan,
            TerraformCommand::Apply => TerragruntCommand::Apply,
            TerraformCommand::Destroy => TerragruntCommand::Destroy,
            TerraformCommand::Output => TerragruntCommand::Output,
            TerraformCommand::Show => TerragruntCommand::Show,
            TerraformCommand::State => TerragruntCommand::State,
            TerraformCommand::Import => TerragruntCommand::Import,
            TerraformCommand::Refresh => TerragruntCommand::Refresh,
            TerraformCommand::Taint => TerragruntCommand::Taint,
            TerraformCommand::Untaint => TerragruntCommand::Untaint,
            TerraformCommand::Workspace => TerragruntCommand::Workspace,
        }
    }
}
