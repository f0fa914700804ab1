//! The command registry: named commands mapped to actions, serde-backed so hosts can
//! ship custom command sets as data.

use serde::{Deserialize, Serialize};
use smartmark_markup::MarkupPair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
/// What a registered command does when dispatched.
pub enum CommandAction {
    /// Toggle a markup pair around every cursor.
    Wrap {
        /// Opening delimiter inserted before the wrapped text.
        opening: String,
        /// Closing delimiter inserted after the wrapped text.
        closing: String,
    },
    /// Expand every cursor's selection and delete it.
    SmartDelete,
    /// Expand every cursor's selection and cycle its case.
    CaseCycle,
    /// Raise the heading level of the selected lines.
    HeadingIncrease,
    /// Lower the heading level of the selected lines.
    HeadingDecrease,
    /// Hand the keystroke back to the host's own newline command, which is already
    /// per-cursor on the host side.
    NewLine,
    /// Delete the active file and navigate back.
    DeleteCurrentFile,
    /// Copy the active file's path, cycling relative → absolute → parent folder.
    CopyPath,
    /// Copy the active file's name, appending the extension on a second invocation.
    CopyFileName,
    /// Flip the host's line-number display flag.
    ToggleLineNumbers,
    /// Flip the host's readable-line-length flag.
    ToggleReadableLineLength,
    /// Hide all currently displayed notices.
    HideNotices,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One named command a host can bind to a hotkey or list in its palette.
pub struct CommandSpec {
    /// Stable identifier the host dispatches by.
    pub id: String,
    /// Human-readable command name.
    pub name: String,
    /// The action dispatched when the command runs.
    pub action: CommandAction,
}

impl CommandSpec {
    /// Create a command spec.
    pub fn new(id: impl Into<String>, name: impl Into<String>, action: CommandAction) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            action,
        }
    }
}

/// The built-in command set: the markup commands, the smart special commands, and the
/// file/editor utility commands.
pub fn builtin_commands() -> Vec<CommandSpec> {
    let wrap = |id: &str, name: &str, pair: MarkupPair| {
        CommandSpec::new(
            id,
            name,
            CommandAction::Wrap {
                opening: pair.opening,
                closing: pair.closing,
            },
        )
    };

    vec![
        wrap("smarter-bold", "Smarter Bold", MarkupPair::bold()),
        wrap("smarter-italics", "Smarter Italics", MarkupPair::italics()),
        wrap(
            "smarter-strikethrough",
            "Smarter Strikethrough",
            MarkupPair::strikethrough(),
        ),
        wrap("smarter-highlight", "Smarter Highlight", MarkupPair::highlight()),
        wrap("smarter-code", "Smarter Code", MarkupPair::inline_code()),
        wrap("smarter-math", "Smarter Math", MarkupPair::inline_math()),
        wrap("smarter-comment", "Smarter Comment", MarkupPair::comment()),
        wrap(
            "smarter-html-comment",
            "Smarter HTML Comment",
            MarkupPair::html_comment(),
        ),
        wrap(
            "smarter-markdown-link",
            "Smarter Markdown/Image Link",
            MarkupPair::link(),
        ),
        wrap("smarter-wikilink", "Smarter Wikilink", MarkupPair::wikilink()),
        wrap("smarter-image-embed", "Smarter Image Embed", MarkupPair::image()),
        CommandSpec::new("smarter-delete", "Smarter Delete Text", CommandAction::SmartDelete),
        CommandSpec::new(
            "smarter-case-switch",
            "Smarter Case Switch",
            CommandAction::CaseCycle,
        ),
        CommandSpec::new(
            "smarter-heading-increase",
            "Smarter Increase Heading Level",
            CommandAction::HeadingIncrease,
        ),
        CommandSpec::new(
            "smarter-heading-decrease",
            "Smarter Decrease Heading Level",
            CommandAction::HeadingDecrease,
        ),
        CommandSpec::new("smarter-new-line", "Smarter New Line", CommandAction::NewLine),
        CommandSpec::new(
            "smarter-delete-current-file",
            "Smarter Delete Current File",
            CommandAction::DeleteCurrentFile,
        ),
        CommandSpec::new("smarter-copy-path", "Smarter Copy Path", CommandAction::CopyPath),
        CommandSpec::new(
            "smarter-copy-file-name",
            "Smarter Copy File Name",
            CommandAction::CopyFileName,
        ),
        CommandSpec::new(
            "toggle-line-numbers",
            "Toggle Line Numbers",
            CommandAction::ToggleLineNumbers,
        ),
        CommandSpec::new(
            "toggle-readable-line-length",
            "Toggle Readable Line Length",
            CommandAction::ToggleReadableLineLength,
        ),
        CommandSpec::new("hide-notice", "Hide Notices", CommandAction::HideNotices),
    ]
}
