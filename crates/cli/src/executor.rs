use iac_composer_core::{ExecutionOutput, ExecutionRequest, ProcessExecutor, Result};
use std::process::Command;
use tracing::debug;

/// Runs requests as child processes and captures their output
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionOutput> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args);

        if let Some(dir) = &request.working_directory {
            cmd.current_dir(dir);
        }
        for (key, value) in &request.env {
            cmd.env(key, value);
        }

        debug!("Spawning {} with {} args", request.program, request.args.len());
        let output = cmd.output()?;

        Ok(ExecutionOutput {
            // Killed by a signal
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_and_exit_code() {
        let request = ExecutionRequest::from_tokens(
            vec!["sh".to_string(), "-c".to_string(), "echo $GREETING; exit 3".to_string()],
            None,
            &[("GREETING".to_string(), "hello".to_string())],
        )
        .unwrap();

        let output = SystemExecutor.execute(&request).unwrap();
        assert_eq!(output.exit_code, 3);
        assert_eq!(output.stdout, "hello\n");
    }

    #[test]
    fn test_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let request = ExecutionRequest::from_tokens(
            vec!["pwd".to_string()],
            Some(dir.path()),
            &[],
        )
        .unwrap();

        let output = SystemExecutor.execute(&request).unwrap();
        let reported = std::path::PathBuf::from(output.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let request = ExecutionRequest::from_tokens(
            vec!["iac-composer-no-such-binary".to_string()],
            None,
            &[],
        )
        .unwrap();
        assert!(matches!(
            SystemExecutor.execute(&request),
            Err(iac_composer_core::Error::IoError(_))
        ));
    }
}
