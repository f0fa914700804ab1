//! Host-service abstractions consumed by the utility commands.
//!
//! The dispatch layer never touches the host application directly: everything it needs
//! beyond the buffer is captured by [`HostServices`], so the same commands run against
//! any host that can answer these few questions.

/// Configuration flags the utility commands read and flip on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFlag {
    /// The host asks for confirmation before deleting a file.
    ConfirmFileDeletion,
    /// Line numbers are displayed in the editor gutter.
    ShowLineNumbers,
    /// Lines wrap at a readable width instead of the window width.
    ReadableLineLength,
}

/// The active file as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Path of the file relative to the host's root folder, `/`-separated.
    pub path: String,
    /// Absolute path of the host's root folder.
    pub root: String,
}

impl FileInfo {
    /// Describe a file by its relative path and the host's root folder.
    pub fn new(path: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            root: root.into(),
        }
    }

    /// File name including the extension.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without the extension.
    pub fn basename(&self) -> &str {
        let name = self.name();
        name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
    }

    /// The extension, or an empty string for files without one.
    pub fn extension(&self) -> &str {
        self.name().rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
    }

    /// Absolute path of the file.
    pub fn absolute_path(&self) -> String {
        format!("{}/{}", self.root, self.path)
    }

    /// The containing folder relative to the root, or `/` for files at the root.
    pub fn parent_folder(&self) -> String {
        match self.path.rsplit_once('/') {
            Some((parent, _)) => parent.to_string(),
            None => "/".to_string(),
        }
    }
}

/// The host operations the utility commands need.
pub trait HostServices {
    /// The file currently open in the host, or `None`.
    fn active_file(&self) -> Option<FileInfo>;

    /// Run one of the host's own commands by id, e.g. `app:go-back`.
    fn run_host_command(&mut self, id: &str);

    /// Read a configuration flag.
    fn config_flag(&self, flag: ConfigFlag) -> bool;

    /// Write a configuration flag.
    fn set_config_flag(&mut self, flag: ConfigFlag, value: bool);

    /// Show a notice with the host's default duration.
    fn notify(&mut self, message: &str);

    /// Show a notice that stays visible for `millis` milliseconds.
    fn notify_for(&mut self, message: &str, millis: u64);

    /// Hide every notice currently displayed.
    fn hide_notices(&mut self);
}
