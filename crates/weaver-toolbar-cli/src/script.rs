//! Line scripts for `weaver-toolbar replay`.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! actions h1 bold italic link
//! select bold
//! text hello world
//! press link
//! fail-text
//! press link
//! ```

use miette::{Diagnostic, SourceSpan};
use weaver_toolbar::{ActionList, SelectedSet, ToolbarAction, ToolbarError};

/// One script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Replace the toolbar's action list.
    Actions(ActionList),
    /// Push a selection update from the editor.
    Select(SelectedSet),
    /// Text the editor reports as selected.
    Text(String),
    /// Make selected-text retrieval fail.
    FailText,
    Press(ToolbarAction),
}

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ScriptError {
    #[error("unknown command `{command}` on line {line}")]
    #[diagnostic(
        code(weaver_toolbar::script::unknown_command),
        help("commands are `actions`, `select`, `text`, `fail-text` and `press`")
    )]
    UnknownCommand {
        command: String,
        line: usize,
        #[source_code]
        src: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("`press` takes exactly one action on line {line}")]
    #[diagnostic(code(weaver_toolbar::script::press))]
    Press {
        line: usize,
        #[source_code]
        src: String,
        #[label("expected one action id")]
        span: SourceSpan,
    },

    #[error("invalid action list on line {line}")]
    #[diagnostic(code(weaver_toolbar::script::actions))]
    Actions {
        line: usize,
        #[source]
        #[diagnostic_source]
        source: ToolbarError,
    },
}

/// Parse a whole script.
pub fn parse(script: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    let mut offset = 0;
    for (index, chunk) in script.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += chunk.len();
        let raw = chunk.trim_end_matches(['\n', '\r']);

        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line = index + 1;
        let indent = raw.len() - raw.trim_start().len();
        let (command, rest) = trimmed
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((trimmed, ""));

        let step = match command {
            "actions" => {
                let list = ActionList::from_ids(rest.split_whitespace())
                    .map_err(|source| ScriptError::Actions { line, source })?;
                Step::Actions(list)
            }
            "select" => Step::Select(rest.split_whitespace().map(ToolbarAction::from).collect()),
            "text" => Step::Text(rest.to_string()),
            "fail-text" => Step::FailText,
            "press" => {
                let mut ids = rest.split_whitespace();
                match (ids.next(), ids.next()) {
                    (Some(id), None) => Step::Press(ToolbarAction::from(id)),
                    _ => {
                        return Err(ScriptError::Press {
                            line,
                            src: script.to_string(),
                            span: (line_start + indent, trimmed.len()).into(),
                        });
                    }
                }
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    command: other.to_string(),
                    line,
                    src: script.to_string(),
                    span: (line_start + indent, other.len()).into(),
                });
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse(
            "# demo\nactions bold link\n\nselect bold italic\ntext  hello world \nfail-text\npress link\n",
        )
        .unwrap();

        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[0],
            Step::Actions(ActionList::from_ids(["bold", "link"]).unwrap())
        );
        assert_eq!(
            steps[1],
            Step::Select([ToolbarAction::SetBold, ToolbarAction::SetItalic].into_iter().collect())
        );
        assert_eq!(steps[2], Step::Text("hello world".into()));
        assert_eq!(steps[3], Step::FailText);
        assert_eq!(steps[4], Step::Press(ToolbarAction::InsertLink));
    }

    #[test]
    fn test_empty_select_clears() {
        let steps = parse("select").unwrap();
        assert_eq!(steps, [Step::Select(SelectedSet::new())]);
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("select bold\n  frobnicate\n").unwrap_err();
        match err {
            ScriptError::UnknownCommand {
                command, line, span, ..
            } => {
                assert_eq!(command, "frobnicate");
                assert_eq!(line, 2);
                assert_eq!(span.offset(), 14);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_crlf_spans_stay_aligned() {
        let source = "select bold\r\npress link\r\n  frobnicate\r\n";
        let err = parse(source).unwrap_err();
        match err {
            ScriptError::UnknownCommand { line, span, .. } => {
                assert_eq!(line, 3);
                assert_eq!(&source[span.offset()..span.offset() + span.len()], "frobnicate");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_press_needs_one_action() {
        assert!(matches!(parse("press"), Err(ScriptError::Press { line: 1, .. })));
        assert!(matches!(
            parse("press bold italic"),
            Err(ScriptError::Press { .. })
        ));
    }

    #[test]
    fn test_duplicate_actions() {
        assert!(matches!(
            parse("actions bold bold"),
            Err(ScriptError::Actions {
                source: ToolbarError::DuplicateAction(_),
                ..
            })
        ));
    }
}
