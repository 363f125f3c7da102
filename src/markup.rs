//! Bracketed color tags used inside baseline text.
//!
//! Baseline authors write `[red]`, `[underline]`, `[normal]` and so on in
//! explanations; these are turned into ANSI SGR sequences, or stripped when
//! colors are disabled.

/// Supported tags and their SGR codes.
pub const TAGS: &[(&str, u8)] = &[
    ("[red]", 91),
    ("[green]", 92),
    ("[yellow]", 93),
    ("[blue]", 94),
    ("[magenta]", 95),
    ("[underline]", 4),
    ("[normal]", 0),
];

/// Replace tags in display text with real ANSI escape sequences.
#[must_use]
pub fn render(text: &str, no_colors: bool) -> String {
    substitute(text, no_colors, |code| format!("\x1b[{code}m"))
}

/// Replace tags in a raw JSON document with `\u001b` escapes.
///
/// Runs before parsing, so the escape must be written in JSON string syntax
/// for the parsed values to carry the escape character.
#[must_use]
pub fn render_json(document: &str, no_colors: bool) -> String {
    substitute(document, no_colors, |code| format!("\\u001b[{code}m"))
}

/// Remove every tag from `text`.
#[must_use]
pub fn strip(text: &str) -> String {
    render(text, true)
}

fn substitute(text: &str, no_colors: bool, escape: impl Fn(u8) -> String) -> String {
    let mut out = text.to_string();
    for (tag, code) in TAGS {
        if !out.contains(tag) {
            continue;
        }
        let replacement = if no_colors { String::new() } else { escape(*code) };
        out = out.replace(tag, &replacement);
    }
    out
}
