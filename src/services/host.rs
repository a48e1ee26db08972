// Interactive host capabilities: directory choice, prompts, messages, opening files

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::utils::error::{LcError, ProcessError, Result};

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Validator used by [`Host::prompt_string`]; returns an error message to
/// display, or `None` to accept the value
pub type Validator<'a> = &'a dyn Fn(&str) -> Option<String>;

/// What the scaffolding workflows need from their environment.
///
/// `Ok(None)` from the choosing/prompting methods means the user cancelled.
pub trait Host {
    fn choose_directory(&mut self) -> Result<Option<PathBuf>>;

    fn prompt_string(&mut self, prompt: &str, validate: Validator<'_>) -> Result<Option<String>>;

    fn show_message(&mut self, kind: MessageKind, text: &str);

    fn open_file(&mut self, path: &Path) -> Result<()>;
}

/// Host backed by a terminal: reads answers from `input`, writes prompts and
/// messages to `output`
pub struct TerminalHost<R, W> {
    input: R,
    output: W,
    editor: Option<String>,
    default_dir: PathBuf,
}

impl TerminalHost<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Terminal host on stdin/stderr; without an editor, $VISUAL then $EDITOR is used
    pub fn stdio(editor: Option<String>, default_dir: PathBuf) -> Self {
        let editor = editor
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok());
        Self::new(std::io::stdin().lock(), std::io::stderr(), editor, default_dir)
    }
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(input: R, output: W, editor: Option<String>, default_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            editor,
            default_dir,
        }
    }

    /// Replace the editor command; `None` keeps the current one
    pub fn set_editor(&mut self, editor: Option<String>) {
        if editor.is_some() {
            self.editor = editor;
        }
    }

    /// Print `prompt` and read one line; `None` on end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").map_err(host_io)?;
        self.output.flush().map_err(host_io)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(host_io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn editor_command(&self) -> Option<&str> {
        self.editor.as_deref().filter(|e| !e.trim().is_empty())
    }
}

impl<R: BufRead, W: Write> Host for TerminalHost<R, W> {
    fn choose_directory(&mut self) -> Result<Option<PathBuf>> {
        let prompt = format!(
            "Choose a folder to use as the workspace [{}]: ",
            self.default_dir.display()
        );
        Ok(self.ask(&prompt)?.map(|answer| {
            if answer.is_empty() {
                self.default_dir.clone()
            } else {
                PathBuf::from(answer)
            }
        }))
    }

    fn prompt_string(&mut self, prompt: &str, validate: Validator<'_>) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(&format!("{prompt}: "))? else {
                return Ok(None);
            };
            // An empty answer cancels, like dismissing an input box
            if answer.is_empty() {
                return Ok(None);
            }
            match validate(&answer) {
                None => return Ok(Some(answer)),
                Some(message) => self.show_message(MessageKind::Error, &message),
            }
        }
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        let line = match kind {
            MessageKind::Info => format!("{text}\n"),
            MessageKind::Error => format!("✗ {text}\n"),
        };
        // Messages are best effort; a closed terminal must not fail the workflow
        let _ = self.output.write_all(line.as_bytes());
    }

    fn open_file(&mut self, path: &Path) -> Result<()> {
        let Some(editor) = self.editor_command() else {
            self.show_message(MessageKind::Info, &format!("Open {} in your editor", path.display()));
            return Ok(());
        };

        let argv = split_command(editor)?;
        let Some((program, args)) = argv.split_first() else {
            return Err(LcError::ConfigError("'editor' cannot be empty".to_string()));
        };
        tracing::debug!(%program, path = %path.display(), "opening file");

        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .map_err(|source| ProcessError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ProcessError::NonZeroExit {
                program: program.clone(),
                status: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Split an editor command line with shell quoting rules
fn split_command(command: &str) -> Result<Vec<String>> {
    shlex::split(command).ok_or_else(|| {
        LcError::ConfigError(format!("Cannot parse editor command '{command}' (check its quoting)"))
    })
}

fn host_io(err: std::io::Error) -> LcError {
    LcError::HostError(format!("terminal I/O failed: {err}"))
}
