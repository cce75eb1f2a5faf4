//! Copy-to-clipboard workflow: prefer the async Clipboard API, fall back to
//! the legacy `execCommand('copy')` path, and flash a confirmation on
//! success. Browser access goes through [`ClipboardBackend`] and
//! [`Confirmation`] so the workflow runs against fakes in tests.

use std::rc::Rc;

use thiserror::Error;

/// Which mechanism performed (or attempted) the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// `navigator.clipboard.writeText` in a secure context.
    AsyncApi,
    /// Off-screen textarea plus `document.execCommand('copy')`.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
    #[error("copy command failed: {0}")]
    Command(String),
    #[error("{0}")]
    Dom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed { path: CopyPath, error: CopyError },
}

impl CopyOutcome {
    pub fn path(&self) -> CopyPath {
        match self {
            CopyOutcome::Copied(path) | CopyOutcome::Failed { path, .. } => *path,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

pub type WriteDone = Box<dyn FnOnce(Result<(), CopyError>)>;

pub trait ClipboardBackend {
    /// Whether the async API exists and the page is a secure context.
    fn async_available(&self) -> bool;

    /// Starts an async write; `done` is invoked once the write settles.
    fn write_async(&self, text: &str, done: WriteDone);

    /// Synchronous legacy copy. Implementations clean up any temporary
    /// elements whether or not the copy succeeded.
    fn copy_legacy(&self, text: &str) -> Result<(), CopyError>;
}

/// Transient "copied" message.
pub trait Confirmation {
    /// Shows the message now and hides it after `duration_ms`. Overlapping
    /// calls each schedule their own hide.
    fn flash(&self, duration_ms: i32);
}

/// Copies `text`, flashes the confirmation on success and reports the
/// outcome. On the async path `on_outcome` runs once the write settles.
pub fn copy_text<B>(
    backend: &B,
    confirmation: Rc<dyn Confirmation>,
    text: &str,
    duration_ms: i32,
    on_outcome: impl FnOnce(CopyOutcome) + 'static,
) where
    B: ClipboardBackend + ?Sized,
{
    if backend.async_available() {
        backend.write_async(
            text,
            Box::new(move |result| {
                on_outcome(settle(CopyPath::AsyncApi, result, &*confirmation, duration_ms))
            }),
        );
    } else {
        let result = backend.copy_legacy(text);
        on_outcome(settle(CopyPath::Legacy, result, &*confirmation, duration_ms));
    }
}

fn settle(
    path: CopyPath,
    result: Result<(), CopyError>,
    confirmation: &dyn Confirmation,
    duration_ms: i32,
) -> CopyOutcome {
    match result {
        Ok(()) => {
            confirmation.flash(duration_ms);
            CopyOutcome::Copied(path)
        }
        Err(error) => CopyOutcome::Failed { path, error },
    }
}
