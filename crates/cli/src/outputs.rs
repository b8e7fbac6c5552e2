//! GitHub Action outputs

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Ordered action outputs, written once at the end of a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    entries: Vec<(String, String)>,
}

impl ActionOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render in the `GITHUB_OUTPUT` file format
    pub fn to_file_format(&self, delimiter: &str) -> String {
        let mut rendered = String::new();
        for (name, value) in &self.entries {
            rendered.push_str(&format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"));
        }
        rendered
    }

    /// Render as plain `name=value` lines
    pub fn to_plain_lines(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!("{name}={value}\n"))
            .collect()
    }

    /// Append to the `GITHUB_OUTPUT` file when given, else print to stdout
    pub fn write(&self, output_file: Option<&Path>) -> Result<()> {
        match output_file {
            Some(path) => {
                let delimiter = Self::delimiter();
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open output file: {}", path.display()))?;
                file.write_all(self.to_file_format(&delimiter).as_bytes())
                    .with_context(|| format!("Failed to write outputs to: {}", path.display()))?;
            }
            None => print!("{}", self.to_plain_lines()),
        }
        Ok(())
    }

    fn delimiter() -> String {
        format!("ghadelimiter_{}", Uuid::new_v4())
    }
}
