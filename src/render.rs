// Rendering of generated Python configuration modules

use crate::constants;
use std::fmt::Write;

/// Render `value` as a single-quoted Python string literal.
pub fn python_str_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\x7f' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render a list of strings as a Python list literal, e.g. `['a', 'b']`.
pub fn python_list_literal(items: &[String]) -> String {
    let rendered: Vec<String> = items.iter().map(|s| python_str_literal(s)).collect();
    format!("[{}]", rendered.join(", "))
}

/// Content of the generated default settings module.
pub fn default_settings_module(settings_module: &str) -> String {
    format!(
        "{} = {}",
        constants::SETTINGS_PATH_VAR,
        python_str_literal(settings_module)
    )
}

/// Content of the generated run-time plugins module.
pub fn default_plugins_module(plugins: &[String]) -> String {
    format!(
        "{} = {}\n",
        constants::PLUGINS_VAR,
        python_list_literal(plugins)
    )
}
