//! Driving the composer binary and decoding its captured output.

use crate::composer::output::{CaptureBuffer, OutputSink};
use crate::error::Error;
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Stdio};

/// Ordered argument mapping for one Composer invocation: bare flags
/// (`-n`, `--no-plugins`) and valued options (`--format json`).
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    entries: Vec<(String, Option<String>)>,
}

impl CommandArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare flag such as `-n` or `--no-plugins`.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), None));
        self
    }

    /// Add a valued option such as `--format json`.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((name.into(), Some(value.into())));
        self
    }

    /// Whether the arguments request JSON-formatted output.
    #[must_use]
    pub fn wants_json(&self) -> bool {
        self.entries.iter().any(|(name, value)| {
            (name == "--format" || name == "-f") && value.as_deref() == Some("json")
        })
    }

    /// Flatten into argv form: `--long=value` for long options,
    /// `-s value` for short ones, flags verbatim.
    fn to_argv(&self) -> Vec<String> {
        let mut argv = Vec::new();
        for (name, value) in &self.entries {
            match value {
                Some(value) if name.starts_with("--") => argv.push(format!("{name}={value}")),
                Some(value) => {
                    argv.push(name.clone());
                    argv.push(value.clone());
                }
                None => argv.push(name.clone()),
            }
        }
        argv
    }
}

/// Output of one Composer invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Decoded payload when JSON output was requested.
    Json(Value),
    /// Raw final chunk otherwise.
    Text(String),
}

/// Run `composer <name> <args>` to completion, feeding captured output
/// into `sink`.
///
/// Composer writes informational lines to stderr and the structured
/// result to stdout, so stderr lines are recorded first and the full
/// stdout payload becomes the final chunk.
pub(crate) fn invoke(
    composer: &Path,
    name: &str,
    args: &CommandArgs,
    cwd: &Path,
    sink: &mut dyn OutputSink,
) -> Result<(), Error> {
    let output = Command::new(composer)
        .arg(name)
        .args(args.to_argv())
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::CommandSpawn {
            command: name.to_string(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    if !output.status.success() {
        return Err(Error::CommandFailed {
            command: name.to_string(),
            status: output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |code| code.to_string()),
            stderr: stderr.trim().to_string(),
        });
    }

    for line in stderr.lines() {
        if !line.trim().is_empty() {
            sink.write(line);
        }
    }
    sink.write(&stdout);

    Ok(())
}

/// Decode the final captured chunk per the requested output format.
/// The chunk is trimmed before JSON decoding to tolerate a trailing
/// newline after the payload.
pub(crate) fn decode_last_chunk(
    name: &str,
    wants_json: bool,
    mut chunks: Vec<String>,
) -> Result<CommandResult, Error> {
    let last = chunks.pop().unwrap_or_default();

    if wants_json {
        let value = serde_json::from_str(last.trim()).map_err(|source| Error::MalformedJson {
            origin: format!("composer {name} output"),
            source,
        })?;
        return Ok(CommandResult::Json(value));
    }

    Ok(CommandResult::Text(last))
}

/// Run a command to completion and decode its final output chunk.
///
/// Each call owns a fresh capture buffer; nothing is shared between
/// invocations.
pub(crate) fn run(
    composer: &Path,
    name: &str,
    args: &CommandArgs,
    cwd: &Path,
) -> Result<CommandResult, Error> {
    let mut sink = CaptureBuffer::new();
    invoke(composer, name, args, cwd, &mut sink)?;
    decode_last_chunk(name, args.wants_json(), sink.drain())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;
    use serde_json::json;

    #[test]
    fn test_wants_json_long_and_short_forms() {
        assert!(CommandArgs::new().option("--format", "json").wants_json());
        assert!(CommandArgs::new().option("-f", "json").wants_json());
        assert!(!CommandArgs::new().option("--format", "text").wants_json());
        assert!(!CommandArgs::new().flag("-n").wants_json());
    }

    #[test]
    fn test_argv_layout() {
        let args = CommandArgs::new()
            .flag("-q")
            .flag("-n")
            .option("--format", "json")
            .option("-d", "/project");

        assert_eq!(
            args.to_argv(),
            vec!["-q", "-n", "--format=json", "-d", "/project"]
        );
    }

    #[test]
    fn test_decode_last_chunk_takes_final_entry() {
        let chunks = vec![
            "Loading composer repositories".to_string(),
            r#"{"installed":[{"name":"a/b","version":"1.0.0"}]}"#.to_string(),
        ];

        let result = decode_last_chunk("outdated", true, chunks).unwrap();
        assert_eq!(
            result,
            CommandResult::Json(json!({"installed": [{"name": "a/b", "version": "1.0.0"}]}))
        );
    }

    #[test]
    fn test_decode_last_chunk_text_passthrough() {
        let chunks = vec!["info".to_string(), "2.7.1\n".to_string()];

        let result = decode_last_chunk("--version", false, chunks).unwrap();
        assert_eq!(result, CommandResult::Text("2.7.1\n".to_string()));
    }

    #[test]
    fn test_decode_last_chunk_tolerates_trailing_newline() {
        let chunks = vec!["{\"installed\":[]}\n\n".to_string()];

        let result = decode_last_chunk("outdated", true, chunks).unwrap();
        assert_eq!(result, CommandResult::Json(json!({"installed": []})));
    }

    #[test]
    fn test_decode_last_chunk_invalid_json_is_fatal() {
        let chunks = vec!["not json".to_string()];

        let err = decode_last_chunk("outdated", true, chunks).unwrap_err();
        assert_eq!(err.code(), codes::MALFORMED_JSON);
    }

    #[test]
    fn test_decode_empty_capture_yields_empty_text() {
        let result = decode_last_chunk("about", false, Vec::new()).unwrap();
        assert_eq!(result, CommandResult::Text(String::new()));
    }

    #[cfg(unix)]
    mod stub {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;
        use tempfile::tempdir;

        fn write_stub(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("composer");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_invoke_records_stderr_before_stdout() {
            let dir = tempdir().unwrap();
            let stub = write_stub(
                dir.path(),
                r#"echo "Loading repositories" >&2
printf '%s' '{"installed":[]}'"#,
            );

            let mut sink = CaptureBuffer::new();
            invoke(
                &stub,
                "outdated",
                &CommandArgs::new(),
                dir.path(),
                &mut sink,
            )
            .unwrap();

            let chunks = sink.drain();
            assert_eq!(chunks, vec!["Loading repositories", r#"{"installed":[]}"#]);
        }

        #[test]
        fn test_run_decodes_stub_json_payload() {
            let dir = tempdir().unwrap();
            let stub = write_stub(
                dir.path(),
                r#"echo "Info: checking platform" >&2
printf '%s' '{"installed":[{"name":"a/b","version":"1.0.0"}]}'"#,
            );

            let args = CommandArgs::new().flag("-n").option("--format", "json");
            let result = run(&stub, "outdated", &args, dir.path()).unwrap();

            let CommandResult::Json(value) = result else {
                panic!("expected JSON result");
            };
            assert_eq!(value["installed"][0]["name"], "a/b");
        }

        #[test]
        fn test_nonzero_exit_is_command_failed() {
            let dir = tempdir().unwrap();
            let stub = write_stub(
                dir.path(),
                r#"echo "something broke" >&2
exit 1"#,
            );

            let err = run(&stub, "outdated", &CommandArgs::new(), dir.path()).unwrap_err();
            assert_eq!(err.code(), codes::COMMAND_FAILED);
            let Error::CommandFailed { status, stderr, .. } = err else {
                panic!("expected CommandFailed");
            };
            assert_eq!(status, "1");
            assert!(stderr.contains("something broke"));
        }

        #[test]
        fn test_missing_binary_is_command_failed() {
            let dir = tempdir().unwrap();
            let missing = dir.path().join("no-such-composer");

            let err = run(&missing, "outdated", &CommandArgs::new(), dir.path()).unwrap_err();
            assert_eq!(err.code(), codes::COMMAND_FAILED);
        }
    }
}
