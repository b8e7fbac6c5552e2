//! Static per-command capability tables
//!
//! Which flags a command accepts is pure data here; the assemblers only ask
//! [`supports`] and never hard-code command lists themselves.

/// A flag family whose validity depends on the command being run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `-auto-approve`
    AutoApprove,
    /// `-target <address>`
    Target,
    /// `-var key=value` and `-var-file <path>`
    Variables,
    /// `-backend-config`, `-reconfigure`, `-migrate-state`
    BackendConfig,
    /// `-out <path>`
    OutFile,
    /// Positional plan file
    PlanFile,
}

const AUTO_APPROVE_COMMANDS: &[&str] = &["apply", "destroy"];

const TARGET_COMMANDS: &[&str] = &["plan", "apply", "destroy", "refresh", "taint", "untaint"];

const VARIABLE_COMMANDS: &[&str] = &["plan", "apply", "destroy", "refresh", "import"];

const BACKEND_CONFIG_COMMANDS: &[&str] = &["init"];

const OUT_FILE_COMMANDS: &[&str] = &["plan"];

const PLAN_FILE_COMMANDS: &[&str] = &["apply"];

impl Capability {
    /// Commands that accept this capability
    pub fn commands(&self) -> &'static [&'static str] {
        match self {
            Capability::AutoApprove => AUTO_APPROVE_COMMANDS,
            Capability::Target => TARGET_COMMANDS,
            Capability::Variables => VARIABLE_COMMANDS,
            Capability::BackendConfig => BACKEND_CONFIG_COMMANDS,
            Capability::OutFile => OUT_FILE_COMMANDS,
            Capability::PlanFile => PLAN_FILE_COMMANDS,
        }
    }
}

/// Whether `command` accepts the flags of `capability`
pub fn supports(capability: Capability, command: &str) -> bool {
    capability.commands().contains(&command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_approve_only_for_apply_and_destroy() {
        assert!(supports(Capability::AutoApprove, "apply"));
        assert!(supports(Capability::AutoApprove, "destroy"));
        assert!(!supports(Capability::AutoApprove, "plan"));
        assert!(!supports(Capability::AutoApprove, "init"));
    }

    #[test]
    fn test_target_commands() {
        for command in ["plan", "apply", "destroy", "refresh", "taint", "untaint"] {
            assert!(supports(Capability::Target, command), "{command} should accept -target");
        }
        for command in ["fmt", "init", "validate", "import", "output"] {
            assert!(!supports(Capability::Target, command), "{command} should not accept -target");
        }
    }

    #[test]
    fn test_variable_commands() {
        assert!(supports(Capability::Variables, "import"));
        assert!(supports(Capability::Variables, "refresh"));
        assert!(!supports(Capability::Variables, "taint"));
        assert!(!supports(Capability::Variables, "validate"));
    }

    #[test]
    fn test_unknown_commands_support_nothing() {
        assert!(!supports(Capability::Target, "run-all"));
        assert!(!supports(Capability::Variables, ""));
    }
}
