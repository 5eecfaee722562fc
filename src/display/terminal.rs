//! TTY detection and color support logic

use std::io::IsTerminal;

/// Whether the preview should be styled, based on the environment and
/// whether stdout is a terminal
pub fn should_use_colors() -> bool {
    colors_enabled(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// `NO_COLOR` (https://no-color.org/) beats `CLICOLOR_FORCE`, which beats
/// `CLICOLOR=0`; otherwise style only when writing to a TTY
fn colors_enabled(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if var("NO_COLOR").is_some() {
        return false;
    }

    match (var("CLICOLOR_FORCE").as_deref(), var("CLICOLOR").as_deref()) {
        (Some(force), _) if force != "0" => true,
        (_, Some("0")) => false,
        _ => is_tty,
    }
}
