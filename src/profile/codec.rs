//! JSON encoding of the settings file.
//!
//! Reads are lenient: `//` and `/* */` comments, trailing commas and any
//! casing of the property names are accepted. Writes are pretty-printed
//! with camelCase keys.
use serde_json::{Map, Value};

use super::{Profile, ProfileSet};
use crate::lib::fs::strip_bom;

/// Canonical property names; incoming keys are matched ignoring ASCII case.
const PROFILE_KEYS: [&str; 3] = ["name", "clientId", "clientSecret"];

/// Serialize the set as a pretty JSON array.
pub fn encode(profiles: &ProfileSet) -> Result<String, serde_json::Error> {
    let entries: Vec<&Profile> = profiles.iter().collect();
    serde_json::to_string_pretty(&entries)
}

/// Parse settings-file contents into profiles, in file order.
pub fn decode(contents: &str) -> Result<Vec<Profile>, String> {
    let cleaned = strip_trailing_commas(&strip_comments(strip_bom(contents)));
    let document: Value =
        serde_json::from_str(&cleaned).map_err(|err| format!("invalid JSON: {err}"))?;
    let Value::Array(items) = document else {
        return Err("expected a JSON array of profiles".into());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_entry(index, item))
        .collect()
}

fn decode_entry(index: usize, item: Value) -> Result<Profile, String> {
    let Value::Object(object) = item else {
        return Err(format!("entry {index} is not an object"));
    };

    let mut canonical = Map::new();
    for (key, value) in object {
        // Null values are treated as absent.
        if value.is_null() {
            continue;
        }
        let key = PROFILE_KEYS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(&key))
            .map(|known| known.to_string())
            .unwrap_or(key);
        canonical.insert(key, value);
    }

    serde_json::from_value(Value::Object(canonical)).map_err(|err| format!("entry {index}: {err}"))
}

/// Replace comments outside of string literals with whitespace.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Drop commas that are followed (after whitespace) by a closing bracket or brace.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (index, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[index + 1..].iter().find(|n| !n.is_whitespace());
            if matches!(next, Some(']') | Some('}')) {
                continue;
            }
        }
        out.push(c);
    }

    out
}
