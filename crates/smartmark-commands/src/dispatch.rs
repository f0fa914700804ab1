//! The command dispatcher: looks up a command id in the registry and drives either the
//! markup engine or the host services.

use crate::clipboard::Clipboard;
use crate::error::CommandError;
use crate::host::{ConfigFlag, HostServices};
use crate::link::resolve_link_pair;
use crate::registry::{CommandAction, CommandSpec, builtin_commands};
use log::debug;
use smartmark_core::{Action, EditBuffer, HeadingShift, MarkupEngine};
use smartmark_markup::MarkupPair;

// Long enough that a full path can actually be read.
const PATH_NOTICE_MILLIS: u64 = 7000;

/// Dispatches named commands to the markup engine and the host services.
///
/// Hosts register the specs from [`CommandDispatcher::commands`] as hotkey-able
/// commands and call [`CommandDispatcher::run`] with the active buffer when one fires.
pub struct CommandDispatcher {
    commands: Vec<CommandSpec>,
    engine: MarkupEngine,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandDispatcher {
    /// A dispatcher over the built-in command set.
    pub fn new() -> Self {
        Self::with_commands(builtin_commands())
    }

    /// A dispatcher over a custom command set.
    pub fn with_commands(commands: Vec<CommandSpec>) -> Self {
        Self {
            commands,
            engine: MarkupEngine::new(),
        }
    }

    /// A dispatcher over a JSON command set, as produced by serializing
    /// [`CommandSpec`] values.
    pub fn from_json(json: &str) -> Result<Self, CommandError> {
        Ok(Self::with_commands(serde_json::from_str(json)?))
    }

    /// The registered commands, for host-side hotkey and palette registration.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Run the command registered under `id` against the active buffer.
    pub fn run<B, H, C>(
        &self,
        id: &str,
        doc: &mut B,
        host: &mut H,
        clipboard: &mut C,
    ) -> Result<(), CommandError>
    where
        B: EditBuffer + ?Sized,
        H: HostServices + ?Sized,
        C: Clipboard + ?Sized,
    {
        let command = self
            .commands
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CommandError::UnknownCommand(id.to_string()))?;
        debug!("dispatching '{}'", command.id);

        match &command.action {
            CommandAction::Wrap { opening, closing } => {
                let mut pair = MarkupPair::new(opening.clone(), closing.clone());
                if pair.closing == "]()" {
                    pair = resolve_link_pair(&pair, &clipboard.read_text()?);
                }
                let cursors = doc.cursors();
                self.engine.apply(doc, &Action::Wrap(pair), &cursors);
            }
            CommandAction::SmartDelete => {
                let cursors = doc.cursors();
                self.engine.apply(doc, &Action::Delete, &cursors);
            }
            CommandAction::CaseCycle => {
                let cursors = doc.cursors();
                self.engine.apply(doc, &Action::CycleCase, &cursors);
            }
            CommandAction::HeadingIncrease => {
                let cursors = doc.cursors();
                self.engine
                    .apply(doc, &Action::Heading(HeadingShift::Increase), &cursors);
            }
            CommandAction::HeadingDecrease => {
                let cursors = doc.cursors();
                self.engine
                    .apply(doc, &Action::Heading(HeadingShift::Decrease), &cursors);
            }
            // The host's own newline command is already per-cursor.
            CommandAction::NewLine => host.run_host_command("editor:newline"),
            CommandAction::DeleteCurrentFile => delete_current_file(host)?,
            CommandAction::CopyPath => copy_path(host, clipboard)?,
            CommandAction::CopyFileName => copy_file_name(host, clipboard)?,
            CommandAction::ToggleLineNumbers => {
                let on = host.config_flag(ConfigFlag::ShowLineNumbers);
                host.set_config_flag(ConfigFlag::ShowLineNumbers, !on);
            }
            CommandAction::ToggleReadableLineLength => {
                let on = host.config_flag(ConfigFlag::ReadableLineLength);
                host.set_config_flag(ConfigFlag::ReadableLineLength, !on);
            }
            CommandAction::HideNotices => host.hide_notices(),
        }
        Ok(())
    }
}

/// Delete the active file through the host's own delete command, then navigate back
/// twice to land on the previously open note.
fn delete_current_file<H: HostServices + ?Sized>(host: &mut H) -> Result<(), CommandError> {
    let file = host.active_file().ok_or(CommandError::NoActiveFile)?;

    // Going through the host's delete command only works without its confirmation
    // prompt in the way.
    if host.config_flag(ConfigFlag::ConfirmFileDeletion) {
        host.notify("This command requires that file-deletion confirmation is disabled.");
        return Ok(());
    }

    host.run_host_command("app:delete-file");
    host.run_host_command("app:go-back");
    host.run_host_command("app:go-back");
    host.notify(&format!("\"{}\" deleted.", file.name()));
    Ok(())
}

/// Copy the active file's path, cycling relative path → absolute path → parent folder
/// based on what the clipboard currently holds.
fn copy_path<H, C>(host: &mut H, clipboard: &mut C) -> Result<(), CommandError>
where
    H: HostServices + ?Sized,
    C: Clipboard + ?Sized,
{
    let file = host.active_file().ok_or(CommandError::NoActiveFile)?;
    let relative = file.path.clone();
    let absolute = file.absolute_path();
    let parent = file.parent_folder();

    let current = clipboard.read_text()?;
    let (next, label) = if current == relative {
        (absolute, "Absolute path copied")
    } else if current == absolute {
        (parent, "Parent folder copied")
    } else {
        (relative, "Relative path copied")
    };

    clipboard.write_text(&next)?;
    host.notify_for(&format!("{label}:\n{next}"), PATH_NOTICE_MILLIS);
    Ok(())
}

/// Copy the active file's name; a second invocation appends the extension.
fn copy_file_name<H, C>(host: &mut H, clipboard: &mut C) -> Result<(), CommandError>
where
    H: HostServices + ?Sized,
    C: Clipboard + ?Sized,
{
    let file = host.active_file().ok_or(CommandError::NoActiveFile)?;
    let current = clipboard.read_text()?;

    let mut name = file.basename().to_string();
    if current == name {
        name.push('.');
        name.push_str(file.extension());
    }

    clipboard.write_text(&name)?;
    host.notify(&format!("File name copied:\n{name}"));
    Ok(())
}
