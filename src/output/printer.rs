use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use crate::config::PrintSettings;
use crate::error::{ChecklistError, Result};

const FILE_PLACEHOLDER: &str = "{file}";

/// Print through the shell's "print" verb, which uses the default printer.
/// The path is a PowerShell single-quoted literal, so `'` is doubled.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn powershell_print_argv(path: &str) -> Vec<String> {
    vec![
        "powershell".to_string(),
        "-NoProfile".to_string(),
        "-Command".to_string(),
        format!(
            "Start-Process -FilePath '{}' -Verb Print",
            path.replace('\'', "''")
        ),
    ]
}

#[cfg(target_os = "windows")]
fn default_command(path: &str) -> Vec<String> {
    powershell_print_argv(path)
}

/// Print to the CUPS default destination
#[cfg(not(target_os = "windows"))]
fn default_command(path: &str) -> Vec<String> {
    vec!["lp".to_string(), path.to_string()]
}

/// Build the print argv for a file. A configured command gets `{file}`
/// substituted, or the path appended when it has no placeholder.
pub fn print_command(settings: &PrintSettings, file: &Path) -> Vec<String> {
    let path = file.display().to_string();
    let Some(template) = &settings.command else {
        return default_command(&path);
    };

    let has_placeholder = template.iter().any(|arg| arg.contains(FILE_PLACEHOLDER));
    let mut argv: Vec<String> = template
        .iter()
        .map(|arg| arg.replace(FILE_PLACEHOLDER, &path))
        .collect();

    if !has_placeholder {
        argv.push(path);
    }

    argv
}

/// Start the print job without waiting for it
fn dispatch(argv: &[String]) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| ChecklistError::Print("print command is empty".to_string()))?;

    log::debug!("spawning print command {:?}", argv);

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ChecklistError::Print(format!("Failed to run '{}': {}", program, e)))?;

    Ok(())
}

/// Send the file to the printer, give the job time to pick it up, then
/// delete the file
pub fn print_and_remove(settings: &PrintSettings, file: &Path) -> Result<()> {
    dispatch(&print_command(settings, file))?;

    thread::sleep(Duration::from_secs(settings.grace_seconds));

    fs::remove_file(file)?;
    log::debug!("removed {}", file.display());
    Ok(())
}
