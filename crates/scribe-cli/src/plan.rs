//! Edit plans
//!
//! A plan is a list of steps loaded from TOML, JSON or YAML. Each step either
//! edits a set of files or runs a command:
//!
//! ```yaml
//! steps:
//!   - edit:
//!       files: ["src/**/*.rs"]
//!       exclude: ["src/generated/**"]
//!       containing: "fn main"
//!       ops:
//!         - insert: { lines: ["#![deny(unsafe_code)]"], at: 0 }
//!         - delete: { pattern: { regex: "^\\s*dbg!" }, every: true }
//!   - run:
//!       command: cargo fmt
//! ```

use std::path::PathBuf;

use scribe_text::{LineDocument, Locator, LocatorOptions, Pattern};
use serde::Deserialize;

use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    /// Directory the file globs and commands are relative to; defaults to the
    /// directory holding the plan
    #[serde(default)]
    pub root: Option<PathBuf>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Edit(EditStep),
    Run(RunStep),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditStep {
    pub files: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub containing: Option<Pattern>,
    pub ops: Vec<Op>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunStep {
    pub command: String,
    /// Working directory relative to the plan root
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

/// A document operation as written in a plan.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Insert(InsertOp),
    Delete(DeleteOp),
    Replace(ReplaceOp),
    Append(AppendOp),
}

#[derive(Debug, Deserialize)]
pub struct InsertOp {
    pub lines: Vec<String>,
    #[serde(flatten)]
    pub locator: LocatorOptions,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteOp {
    #[serde(default)]
    pub pattern: Option<Pattern>,
    #[serde(default)]
    pub block: Option<Vec<Pattern>>,
    #[serde(default)]
    pub every: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplaceOp {
    pub pattern: Pattern,
    pub with: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppendOp {
    pub lines: Vec<String>,
}

/// A validated document operation.
#[derive(Debug, Clone)]
pub enum Edit {
    Insert { lines: Vec<String>, locator: Locator },
    DeleteLine { pattern: Pattern, every: bool },
    DeleteBlock { block: Vec<Pattern>, every: bool },
    Replace { pattern: Pattern, with: String },
    Append { lines: Vec<String> },
}

impl Edit {
    pub fn apply(&self, doc: &mut LineDocument) -> scribe_text::Result<()> {
        match self {
            Self::Insert { lines, locator } => doc.insert_lines(lines, locator)?,
            Self::DeleteLine {
                pattern,
                every: false,
            } => doc.delete_line(pattern)?,
            Self::DeleteLine {
                pattern,
                every: true,
            } => {
                doc.delete_every_line(pattern);
            }
            Self::DeleteBlock { block, every: false } => doc.delete_block(block)?,
            Self::DeleteBlock { block, every: true } => {
                doc.delete_every_block(block);
            }
            Self::Replace { pattern, with } => doc.replace_all(pattern, with),
            Self::Append { lines } => doc.append_lines(lines),
        }
        Ok(())
    }
}

impl TryFrom<Op> for Edit {
    type Error = CliError;

    fn try_from(op: Op) -> Result<Self> {
        let edit = match op {
            Op::Insert(InsertOp { lines, locator }) => Self::Insert {
                lines,
                locator: locator.into_locator()?,
            },
            Op::Delete(DeleteOp {
                pattern: Some(pattern),
                block: None,
                every,
            }) => Self::DeleteLine { pattern, every },
            Op::Delete(DeleteOp {
                pattern: None,
                block: Some(block),
                every,
            }) => Self::DeleteBlock { block, every },
            Op::Delete(_) => {
                return Err(CliError::user(
                    "delete needs exactly one of `pattern` or `block`",
                ));
            }
            Op::Replace(ReplaceOp { pattern, with }) => Self::Replace { pattern, with },
            Op::Append(AppendOp { lines }) => Self::Append { lines },
        };
        Ok(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Plan {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_plan() {
        let plan = parse(
            r#"{
                "steps": [
                    {"edit": {
                        "files": ["*.txt"],
                        "containing": {"regex": "^todo"},
                        "ops": [
                            {"insert": {"lines": ["a", "b"], "below_every": "x"}},
                            {"delete": {"block": ["a", "b"], "every": true}},
                            {"replace": {"pattern": "x", "with": "y"}},
                            {"append": {"lines": ["end"]}}
                        ]
                    }},
                    {"run": {"command": "echo done"}}
                ]
            }"#,
        );

        assert_eq!(plan.steps.len(), 2);
        let Step::Edit(edit) = &plan.steps[0] else {
            panic!("expected edit step");
        };
        assert!(matches!(edit.containing, Some(Pattern::Regex(_))));
        assert_eq!(edit.ops.len(), 4);
        assert!(matches!(&plan.steps[1], Step::Run(run) if run.command == "echo done"));
    }

    #[test]
    fn test_insert_op_resolves_locator() {
        let op: Op = serde_json::from_str(r#"{"insert": {"lines": ["z"], "at": -1}}"#).unwrap();
        let edit = Edit::try_from(op).unwrap();
        assert!(matches!(edit, Edit::Insert { locator: Locator::At(-1), .. }));
    }

    #[test]
    fn test_insert_op_ambiguous_locator() {
        let op: Op =
            serde_json::from_str(r#"{"insert": {"lines": ["z"], "at": 0, "above": "a"}}"#)
                .unwrap();
        assert!(matches!(
            Edit::try_from(op),
            Err(CliError::Text(scribe_text::Error::AmbiguousLocator { .. }))
        ));
    }

    #[test]
    fn test_insert_op_missing_locator() {
        let op: Op = serde_json::from_str(r#"{"insert": {"lines": ["z"]}}"#).unwrap();
        assert!(matches!(
            Edit::try_from(op),
            Err(CliError::Text(scribe_text::Error::MissingLocator))
        ));
    }

    #[test]
    fn test_delete_op_needs_one_target() {
        let op: Op = serde_json::from_str(r#"{"delete": {"every": true}}"#).unwrap();
        assert!(matches!(Edit::try_from(op), Err(CliError::User { .. })));
    }

    #[test]
    fn test_apply_edits_in_order() {
        let mut doc = LineDocument::new("one\ntwo\none");
        let edits = [
            Edit::Insert {
                lines: vec!["x".into()],
                locator: Locator::AboveEvery(Pattern::from("one")),
            },
            Edit::DeleteLine {
                pattern: Pattern::from("two"),
                every: false,
            },
            Edit::Replace {
                pattern: Pattern::from("x"),
                with: "y".into(),
            },
        ];
        for edit in &edits {
            edit.apply(&mut doc).unwrap();
        }
        assert_eq!(doc.text(), "y\none\ny\none");
    }
}
