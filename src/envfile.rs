//! Structured view of a `KEY=value` configuration file.
//!
//! Parsing keeps every line's original text, so serializing an unmodified file
//! gives back the same bytes and only keys that were `set` change.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ASSIGNMENT: Regex =
        Regex::new(r"^(\s*(?:export\s+)?)([A-Za-z_][A-Za-z0-9_]*)\s*=(.*)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Pair { key: String, raw: String },
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvFile {
    lines: Vec<Line>,
}

fn unquote(v: &str) -> &str {
    let v = v.trim();
    for q in ['"', '\''] {
        if v.len() >= 2 && v.starts_with(q) && v.ends_with(q) {
            return &v[1..v.len() - 1];
        }
    }
    v
}

impl EnvFile {
    pub fn parse(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|raw| match ASSIGNMENT.captures(raw.trim_end_matches('\r')) {
                Some(caps) => Line::Pair {
                    key: caps[2].to_string(),
                    raw: raw.to_string(),
                },
                None => Line::Other(raw.to_string()),
            })
            .collect();
        Self { lines }
    }

    /// Last assignment wins, as with dotenv loaders.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().rev().find_map(|line| match line {
            Line::Pair { key: k, raw } if k == key => ASSIGNMENT
                .captures(raw.trim_end_matches('\r'))
                .and_then(|c| c.get(3))
                .map(|m| unquote(m.as_str())),
            _ => None,
        })
    }

    /// Rewrites every assignment of `key`, or appends one if there is none. A
    /// leading `export` and indentation are kept.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        for line in &mut self.lines {
            if let Line::Pair { key: k, raw } = line {
                if k == key {
                    let cr = if raw.ends_with('\r') { "\r" } else { "" };
                    let prefix = ASSIGNMENT
                        .captures(raw.trim_end_matches('\r'))
                        .and_then(|c| c.get(1))
                        .map_or("", |m| m.as_str())
                        .to_string();
                    *raw = format!("{prefix}{key}={value}{cr}");
                    found = true;
                }
            }
        }
        if found {
            return;
        }

        let pair = Line::Pair {
            key: key.to_string(),
            raw: format!("{key}={value}"),
        };
        // keep a trailing newline trailing
        match self.lines.last() {
            Some(Line::Other(last)) if last.is_empty() => {
                let at = self.lines.len() - 1;
                self.lines.insert(at, pair);
            }
            _ => {
                self.lines.push(pair);
                self.lines.push(Line::Other(String::new()));
            }
        }
    }

    pub fn serialize(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                Line::Pair { raw, .. } | Line::Other(raw) => raw.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
