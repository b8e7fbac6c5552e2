//! Sample invocations shared by the integration tests
//!
//! Each scenario mirrors a typical workflow step and returns the built service.

use iac_composer_core::command::factory;
use iac_composer_core::{
    IacBuilder, ImageToolsBuilder, ImageToolsService, MetadataStore, Result, TerraformService,
    TerragruntService,
};
use serde_json::json;
use std::path::Path;

/// `terraform plan` for a production workspace
pub fn production_plan() -> Result<TerraformService> {
    factory::terraform_plan(Path::new("infra/prod"))
        .with_variables([("region", "eu-west-1"), ("instance_count", "3")])
        .with_var_file("prod.tfvars")
        .with_out_file("prod.tfplan")
        .with_no_color(true)
        .with_lock_timeout("60s")
        .build()
}

/// `terraform init` against an S3 backend
pub fn backend_init() -> Result<TerraformService> {
    factory::terraform_init(Path::new("infra/prod"))
        .with_backend_configs([("bucket", "acme-tf-state"), ("key", "prod/terraform.tfstate")])
        .with_reconfigure(true)
        .build()
}

/// `terragrunt run-all apply` over a live tree, skipping one module
pub fn live_apply() -> Result<TerragruntService> {
    factory::terragrunt_run_all(iac_composer_core::TerragruntCommand::Apply, Path::new("live"))
        .with_auto_approve(true)
        .with_terragrunt_parallelism(4)
        .with_exclude_dir("live/legacy")
        .with_iam_role("arn:aws:iam::123456789012:role/deploy")
        .with_iam_role_session_name("ci")
        .build()
}

/// Multi-arch manifest from JSON metadata
pub fn multi_arch_manifest() -> Result<ImageToolsService> {
    let metadata = MetadataStore::from_json_object(&json!({
        "--tag": ["ghcr.io/acme/app:1.2.0", "ghcr.io/acme/app:latest"],
        "--annotation": "index:org.opencontainers.image.description=Acme app",
        "": ["ghcr.io/acme/app:1.2.0-amd64", "ghcr.io/acme/app:1.2.0-arm64"],
    }))?;

    ImageToolsBuilder::new()
        .with_command("create")
        .with_metadata(metadata)
        .build()
}
