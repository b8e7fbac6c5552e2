use iac_composer_core::ExecutionRequest;

/// Describe a request for the run log.
///
/// `command_depth` is how many leading args name the command itself
/// (e.g. 3 for `buildx imagetools create`).
pub fn command_breakdown(request: &ExecutionRequest, command_depth: usize) -> String {
    let mut lines = vec!["🔧 Command breakdown:".to_string()];
    lines.push(format!("   • executor: {}", request.program));

    let depth = command_depth.min(request.args.len());
    let (path, rest) = request.args.split_at(depth);
    if !path.is_empty() {
        lines.push(format!("   • command: {}", path.join(" ")));
    }

    let (flags, positionals) = split_flags(rest);
    if !flags.is_empty() {
        lines.push("   • flags:".to_string());
        for flag in flags {
            lines.push(format!("      - {flag}"));
        }
    }
    if !positionals.is_empty() {
        lines.push(format!("   • positional: {positionals:?}"));
    }

    if let Some(dir) = &request.working_directory {
        lines.push(format!("   • workingDirectory: {}", dir.display()));
    }

    if !request.env.is_empty() {
        lines.push("   • extraEnv:".to_string());
        for (key, _) in &request.env {
            // Values may be secrets
            lines.push(format!("      - {key}=***"));
        }
    }

    lines.join("\n")
}

/// Pair each flag with the value after it unless that value is itself a flag
fn split_flags(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut flags = Vec::new();
    let mut positionals = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg.starts_with('-') {
            match args.get(i + 1) {
                Some(value) if !value.starts_with('-') => {
                    flags.push(format!("{arg} {value}"));
                    i += 1;
                }
                _ => flags.push(arg.clone()),
            }
        } else {
            positionals.push(arg.clone());
        }
        i += 1;
    }

    (flags, positionals)
}
