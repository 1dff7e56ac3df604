// src/infer.rs
//
// Best-effort type and default inference over wiki description prose.
// Deterministic and reproducible, not authoritative: the text is
// written for humans, so expect the odd false positive.

use crate::template::{DefaultValue, SettingKind};

/// Ordered decision list over the lowercased description; first
/// keyword hit wins. Order carries the precedence, do not sort.
const TYPE_RULES: &[(&[&str], SettingKind)] = &[
    (&["bool", "true", "false"], SettingKind::Bool),
    (&["float", "multiplier", "decimal"], SettingKind::Float),
    (&["integer", "number", "seconds", "slots"], SettingKind::Int),
    (&["string", "url", "name", "id"], SettingKind::String),
];

const DEFAULT_MARKER: &str = "Default value:";

/// Infer `(kind, default)` from one description. Pure.
pub fn infer(description: &str) -> (SettingKind, DefaultValue) {
    let kind = infer_kind(description);
    (kind, infer_default(description, kind))
}

fn infer_kind(description: &str) -> SettingKind {
    let lc = description.to_ascii_lowercase();
    for (keywords, kind) in TYPE_RULES {
        if keywords.iter().any(|kw| lc.contains(kw)) {
            return *kind;
        }
    }
    SettingKind::String
}

fn infer_default(description: &str, kind: SettingKind) -> DefaultValue {
    let Some(at) = description.find(DEFAULT_MARKER) else {
        return DefaultValue::none();
    };
    let tail = &description[at + DEFAULT_MARKER.len()..];
    parse_token(default_token(tail), kind)
}

/// The token runs to the terminating period. A period with digits on
/// both sides is a decimal point, not a terminator. A sentence period
/// inside the default still cuts early — accepted wiki-prose
/// limitation, same for unusual marker phrasings.
fn default_token(tail: &str) -> &str {
    let bytes = tail.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'.' {
            continue;
        }
        let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
        let digit_after = i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit();
        if digit_before && digit_after {
            continue;
        }
        return tail[..i].trim();
    }
    tail.trim()
}

fn parse_token(token: &str, kind: SettingKind) -> DefaultValue {
    // Literal booleans win regardless of the inferred kind.
    if token.eq_ignore_ascii_case("true") {
        return DefaultValue::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return DefaultValue::Bool(false);
    }
    if token.is_empty() || token.eq_ignore_ascii_case("n/a") {
        return DefaultValue::none();
    }
    match kind {
        SettingKind::Float => token
            .parse::<f64>()
            .map(DefaultValue::Float)
            .unwrap_or_else(|_| DefaultValue::Text(s!(token))),
        // via float so "1.0" still lands as int 1
        SettingKind::Int => token
            .parse::<f64>()
            .map(|f| DefaultValue::Int(f.trunc() as i64))
            .unwrap_or_else(|_| DefaultValue::Text(s!(token))),
        SettingKind::Bool | SettingKind::String => DefaultValue::Text(s!(token)),
    }
}
