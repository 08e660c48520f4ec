//! Dialog requests and the outcomes they resolve to.
//!
//! Everything here is plain data so the rules behind the dialogs (key normalization, upload
//! limits, file selection) work without a renderer.

use std::fmt;

/// Every dialog the dialog module can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Confirm,
    AccessKey,
    Upload,
    Filepicker,
}

impl DialogKind {
    pub const ALL: [DialogKind; 4] = [
        DialogKind::Confirm,
        DialogKind::AccessKey,
        DialogKind::Upload,
        DialogKind::Filepicker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DialogKind::Confirm => "confirm",
            DialogKind::AccessKey => "access-key",
            DialogKind::Upload => "upload",
            DialogKind::Filepicker => "filepicker",
        }
    }
}

/// A request to open one dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogRequest {
    Confirm {
        title: String,
        message: String,
    },
    AccessKey {
        title: String,
    },
    Upload {
        title: String,
        policy: UploadPolicy,
    },
    Filepicker {
        title: String,
        files: Vec<String>,
        multiple: bool,
    },
}

impl DialogRequest {
    pub fn kind(&self) -> DialogKind {
        match self {
            DialogRequest::Confirm { .. } => DialogKind::Confirm,
            DialogRequest::AccessKey { .. } => DialogKind::AccessKey,
            DialogRequest::Upload { .. } => DialogKind::Upload,
            DialogRequest::Filepicker { .. } => DialogKind::Filepicker,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DialogRequest::Confirm { title, .. }
            | DialogRequest::AccessKey { title }
            | DialogRequest::Upload { title, .. }
            | DialogRequest::Filepicker { title, .. } => title,
        }
    }
}

/// What a dialog resolved to. Closing a dialog without an answer yields `Dismissed`.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    Confirmed,
    AccessKey(String),
    Uploaded(Vec<UploadedFile>),
    Picked(Vec<String>),
    Dismissed,
}

impl DialogOutcome {
    pub fn confirmed(self) -> bool {
        matches!(self, DialogOutcome::Confirmed)
    }

    pub fn access_key(self) -> Option<String> {
        match self {
            DialogOutcome::AccessKey(raw) => normalize_access_key(&raw),
            _ => None,
        }
    }

    pub fn uploaded(self) -> Vec<UploadedFile> {
        match self {
            DialogOutcome::Uploaded(files) => files,
            _ => Vec::new(),
        }
    }

    pub fn picked(self) -> Vec<String> {
        match self {
            DialogOutcome::Picked(files) => files,
            _ => Vec::new(),
        }
    }
}

/// Trims a pasted access key and drops an optional `Bearer` scheme word.
///
/// A bare scheme word without a key yields `None`.
pub fn normalize_access_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let key = match trimmed.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if trimmed.eq_ignore_ascii_case("bearer") => "",
        _ => trimmed,
    };

    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

/// Limits applied to files chosen in the upload dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Lowercase extensions without the dot. Empty accepts any file.
    pub extensions: Vec<String>,
    pub max_bytes: u64,
    pub multiple: bool,
}

impl UploadPolicy {
    pub fn new(extensions: &[&str], max_bytes: u64) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            max_bytes,
            multiple: false,
        }
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn check(&self, name: &str, size: u64) -> Result<(), UploadRejection> {
        if !self.extensions.is_empty() {
            let extension = name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .unwrap_or_default();

            if !self.extensions.contains(&extension) {
                return Err(UploadRejection::Extension {
                    name: name.to_string(),
                    allowed: self.accept(),
                });
            }
        }

        if size > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                name: name.to_string(),
                size,
                max: self.max_bytes,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadRejection {
    Extension { name: String, allowed: String },
    TooLarge { name: String, size: u64, max: u64 },
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadRejection::Extension { name, allowed } => {
                write!(f, "{} is not an accepted file type ({})", name, allowed)
            }
            UploadRejection::TooLarge { name, size, max } => write!(
                f,
                "{} is {}, the limit is {}",
                name,
                human_size(*size),
                human_size(*max)
            ),
        }
    }
}

/// A file read in the browser and handed back by the upload dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Selection state of the file-picker dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSelection {
    multiple: bool,
    selected: Vec<String>,
}

impl FileSelection {
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            selected: Vec::new(),
        }
    }

    /// Selects or deselects `file`. Single selection replaces the previous choice.
    pub fn toggle(&mut self, file: &str) {
        if let Some(index) = self.selected.iter().position(|f| f == file) {
            self.selected.remove(index);
        } else if self.multiple {
            self.selected.push(file.to_string());
        } else {
            self.selected = vec![file.to_string()];
        }
    }

    pub fn is_selected(&self, file: &str) -> bool {
        self.selected.iter().any(|f| f == file)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.selected
    }
}

pub fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
