//! Checklist preview formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print a preview block with a styled heading (or plain fallback)
pub fn print_preview(block: &str) {
    if should_use_colors() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        print!("{}", style_heading(&skin, block));
    } else {
        print_plain(block);
    }
}

/// Style the heading line only; task lines are printed exactly as they will
/// appear in the document, so markdown-like characters are never interpreted
fn style_heading(skin: &MadSkin, block: &str) -> String {
    let style = &skin.headers[1].compound_style;
    match block.split_once('\n') {
        Some((heading, rest)) => format!("{}\n{}", style.apply_to(heading), rest),
        None => style.apply_to(block).to_string(),
    }
}

/// Customize termimad skin: bold cyan date headings
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);
}

/// Print the block exactly as rendered
fn print_plain(block: &str) {
    print!("{}", block);
}
