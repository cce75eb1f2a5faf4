use std::cell::{Cell, RefCell};
use std::rc::Rc;

use parallax_wasm::clipboard::{
    copy_text, ClipboardBackend, Confirmation, CopyError, CopyOutcome, CopyPath, WriteDone,
};
use parallax_wasm::config::{PageConfig, CONFIRMATION_MS, COPY_ADDRESS};

/// Backend whose async writes stay pending until `settle` is called.
#[derive(Default)]
struct FakeClipboard {
    secure: bool,
    legacy_result: Option<CopyError>,
    pending: RefCell<Option<WriteDone>>,
    async_writes: RefCell<Vec<String>>,
    legacy_writes: RefCell<Vec<String>>,
}

impl FakeClipboard {
    fn settle(&self, result: Result<(), CopyError>) {
        let done = self.pending.borrow_mut().take().expect("no pending write");
        done(result);
    }
}

impl ClipboardBackend for FakeClipboard {
    fn async_available(&self) -> bool {
        self.secure
    }

    fn write_async(&self, text: &str, done: WriteDone) {
        self.async_writes.borrow_mut().push(text.to_string());
        *self.pending.borrow_mut() = Some(done);
    }

    fn copy_legacy(&self, text: &str) -> Result<(), CopyError> {
        self.legacy_writes.borrow_mut().push(text.to_string());
        match &self.legacy_result {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct RecordingConfirmation {
    flashes: RefCell<Vec<i32>>,
}

impl Confirmation for RecordingConfirmation {
    fn flash(&self, duration_ms: i32) {
        self.flashes.borrow_mut().push(duration_ms);
    }
}

fn outcome_slot() -> (Rc<RefCell<Option<CopyOutcome>>>, impl FnOnce(CopyOutcome) + 'static) {
    let slot = Rc::new(RefCell::new(None));
    let sink = slot.clone();
    (slot, move |outcome| *sink.borrow_mut() = Some(outcome))
}

#[test]
fn secure_context_uses_async_api_and_confirms_after_write() {
    let backend = FakeClipboard {
        secure: true,
        ..FakeClipboard::default()
    };
    let confirmation = Rc::new(RecordingConfirmation::default());
    let (outcome, on_outcome) = outcome_slot();

    copy_text(&backend, confirmation.clone(), COPY_ADDRESS, CONFIRMATION_MS, on_outcome);

    assert_eq!(*backend.async_writes.borrow(), vec![COPY_ADDRESS.to_string()]);
    assert!(backend.legacy_writes.borrow().is_empty());
    // Nothing happens until the promise settles.
    assert!(confirmation.flashes.borrow().is_empty());
    assert!(outcome.borrow().is_none());

    backend.settle(Ok(()));
    assert_eq!(*confirmation.flashes.borrow(), vec![2000]);
    assert_eq!(*outcome.borrow(), Some(CopyOutcome::Copied(CopyPath::AsyncApi)));
}

#[test]
fn rejected_async_write_is_reported_without_confirmation() {
    let backend = FakeClipboard {
        secure: true,
        ..FakeClipboard::default()
    };
    let confirmation = Rc::new(RecordingConfirmation::default());
    let (outcome, on_outcome) = outcome_slot();

    copy_text(&backend, confirmation.clone(), "x", 2000, on_outcome);
    backend.settle(Err(CopyError::Rejected("NotAllowedError".into())));

    assert!(confirmation.flashes.borrow().is_empty());
    let outcome = outcome.borrow().clone().unwrap();
    assert_eq!(outcome.path(), CopyPath::AsyncApi);
    assert!(!outcome.is_copied());
}

#[test]
fn insecure_context_falls_back_to_legacy_copy() {
    let backend = FakeClipboard::default();
    let confirmation = Rc::new(RecordingConfirmation::default());
    let (outcome, on_outcome) = outcome_slot();

    copy_text(&backend, confirmation.clone(), COPY_ADDRESS, CONFIRMATION_MS, on_outcome);

    assert!(backend.async_writes.borrow().is_empty());
    assert_eq!(*backend.legacy_writes.borrow(), vec![COPY_ADDRESS.to_string()]);
    assert_eq!(*confirmation.flashes.borrow(), vec![2000]);
    assert_eq!(*outcome.borrow(), Some(CopyOutcome::Copied(CopyPath::Legacy)));
}

#[test]
fn throwing_legacy_copy_reports_error() {
    let backend = FakeClipboard {
        legacy_result: Some(CopyError::Command("SecurityError".into())),
        ..FakeClipboard::default()
    };
    let confirmation = Rc::new(RecordingConfirmation::default());
    let (outcome, on_outcome) = outcome_slot();

    copy_text(&backend, confirmation.clone(), COPY_ADDRESS, CONFIRMATION_MS, on_outcome);

    assert!(confirmation.flashes.borrow().is_empty());
    assert_eq!(
        *outcome.borrow(),
        Some(CopyOutcome::Failed {
            path: CopyPath::Legacy,
            error: CopyError::Command("SecurityError".into()),
        })
    );
}

#[test]
fn repeated_copies_each_flash() {
    let backend = FakeClipboard::default();
    let confirmation = Rc::new(RecordingConfirmation::default());
    let calls = Rc::new(Cell::new(0));
    for _ in 0..3 {
        let calls = calls.clone();
        copy_text(&backend, confirmation.clone(), COPY_ADDRESS, 2000, move |_| {
            calls.set(calls.get() + 1)
        });
    }
    assert_eq!(calls.get(), 3);
    assert_eq!(confirmation.flashes.borrow().len(), 3);
}

#[test]
fn default_config_matches_page_markup() {
    let config = PageConfig::default();
    assert_eq!(config.copy_address, "play.cobblemonacademy.com");
    assert_eq!(config.confirmation_id, "copiedMessage");
    assert_eq!(config.confirmation_visible_class, "show");
    assert_eq!(config.indicator_id, "scrollIndicator");
    assert_eq!(config.indicator_threshold_px, 150.0);
}

#[test]
fn errors_render_readably() {
    assert_eq!(
        CopyError::Rejected("denied".into()).to_string(),
        "clipboard write rejected: denied"
    );
    assert_eq!(
        CopyError::Command("SecurityError".into()).to_string(),
        "copy command failed: SecurityError"
    );
}
