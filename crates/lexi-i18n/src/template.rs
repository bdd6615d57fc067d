//! Minimal `{{.name}}` template rendering for translation strings.
//!
//! # Syntax
//!
//! - `{{.name}}` renders the variable `name`; unknown names render as
//!   `<no value>`.
//! - Spaces inside the delimiters are ignored: `{{ .count }}`.
//! - `{{- ` trims whitespace before the action and ` -}}` trims whitespace
//!   after it. The dash must be followed (or preceded) by a space.
//!
//! # Failure Modes
//!
//! | Failure | Cause |
//! |---------|-------|
//! | [`TemplateError::Unclosed`] | `{{` without a matching `}}` |
//! | [`TemplateError::EmptyAction`] | `{{}}` or `{{ }}` |
//! | [`TemplateError::UnsupportedAction`] | anything other than a field reference |
//!
//! Rendering is single pass; substituted values are never re-scanned.

use thiserror::Error;

/// Text rendered for a field that has no variable.
pub const NO_VALUE: &str = "<no value>";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {offset}")]
    Unclosed { offset: usize },
    #[error("missing value for action at byte {offset}")]
    EmptyAction { offset: usize },
    #[error("unsupported action {action:?} at byte {offset}")]
    UnsupportedAction { offset: usize, action: String },
}

/// Render `template`, substituting `(name, value)` pairs from `vars`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;
    let mut trim_next = false;

    while let Some(open) = rest.find(OPEN) {
        let mut text = &rest[..open];
        if trim_next {
            text = text.trim_start();
        }
        let after_open = &rest[open + OPEN.len()..];
        let action_offset = offset + open;

        let close = after_open.find(CLOSE).ok_or(TemplateError::Unclosed {
            offset: action_offset,
        })?;
        let mut action = &after_open[..close];

        if let Some(stripped) = action.strip_prefix("- ") {
            text = text.trim_end();
            action = stripped;
        }
        trim_next = false;
        if let Some(stripped) = action.strip_suffix(" -") {
            trim_next = true;
            action = stripped;
        }

        out.push_str(text);
        out.push_str(eval(action.trim(), vars, action_offset)?);

        let consumed = open + OPEN.len() + close + CLOSE.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    if trim_next {
        rest = rest.trim_start();
    }
    out.push_str(rest);
    Ok(out)
}

fn eval<'a>(
    action: &str,
    vars: &[(&str, &'a str)],
    offset: usize,
) -> Result<&'a str, TemplateError> {
    if action.is_empty() {
        return Err(TemplateError::EmptyAction { offset });
    }

    let name = action
        .strip_prefix('.')
        .filter(|name| is_identifier(name))
        .ok_or_else(|| TemplateError::UnsupportedAction {
            offset,
            action: action.to_owned(),
        })?;

    Ok(vars
        .iter()
        .find(|&&(var, _)| var == name)
        .map_or(NO_VALUE, |&(_, value)| value))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
