use std::time::Duration;

use thiserror::Error;

use crate::glyph::Glyph;
use crate::notice::{NoticeKind, Notices};

pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Denied(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

// Only one label is active at a time; a revert only applies to the mark it
// was scheduled for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    active: Option<(String, CopyTicket)>,
    issued: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_ref().map(|(label, _)| label.as_str())
    }

    pub fn is_copied(&self, label: &str) -> bool {
        self.active() == Some(label)
    }

    /// Check mark while `label` reads as copied, the copy icon otherwise.
    pub fn glyph(&self, label: &str) -> Glyph {
        if self.is_copied(label) {
            Glyph::Check
        } else {
            Glyph::Copy
        }
    }

    pub fn mark(&mut self, label: impl Into<String>) -> CopyTicket {
        self.issued += 1;
        let ticket = CopyTicket(self.issued);
        self.active = Some((label.into(), ticket));
        ticket
    }

    /// Clears the active label if `ticket` still owns it.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        match &self.active {
            Some((_, current)) if *current == ticket => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the ticket to expire after [`COPY_FEEDBACK`] on success.
    pub fn record(
        &mut self,
        label: &str,
        outcome: Result<(), ClipboardError>,
        notices: &mut Notices,
    ) -> Option<CopyTicket> {
        match outcome {
            Ok(()) => {
                notices.push(
                    NoticeKind::Success,
                    "Copied!",
                    format!("{label} copied to clipboard"),
                );
                Some(self.mark(label))
            }
            Err(e) => {
                log::warn!("copy of {label} failed: {e}");
                notices.push(NoticeKind::Failure, "Copy failed", "Please copy manually");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();
    // navigator.clipboard is undefined outside secure contexts
    if clipboard.is_undefined() {
        return Err(ClipboardError::Unavailable);
    }
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Denied(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
}

#[cfg(not(feature = "hydrate"))]
pub async fn write_text(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_marks_then_reverts() {
        let mut feedback = CopyFeedback::new();
        let mut notices = Notices::new();
        let ticket = feedback
            .record("Email", Ok(()), &mut notices)
            .expect("successful copy should issue a ticket");
        assert!(feedback.is_copied("Email"));
        assert_eq!(feedback.glyph("Email"), Glyph::Check);
        assert_eq!(feedback.glyph("Phone"), Glyph::Copy);
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices.iter().next().map(|n| n.description.as_str()),
            Some("Email copied to clipboard")
        );

        // the 2000ms timer fires
        assert!(feedback.expire(ticket));
        assert!(!feedback.is_copied("Email"));
        assert_eq!(feedback.glyph("Email"), Glyph::Copy);
        assert_eq!(feedback.active(), None);
    }

    #[test]
    fn test_new_label_supersedes_and_stale_revert_ignored() {
        let mut feedback = CopyFeedback::new();
        let mut notices = Notices::new();
        let email = feedback.record("Email", Ok(()), &mut notices).unwrap();
        let phone = feedback.record("Phone", Ok(()), &mut notices).unwrap();

        assert!(!feedback.is_copied("Email"));
        assert!(feedback.is_copied("Phone"));

        // Email's timer fires first and must not clear Phone
        assert!(!feedback.expire(email));
        assert!(feedback.is_copied("Phone"));

        assert!(feedback.expire(phone));
        assert_eq!(feedback.active(), None);
    }

    #[test]
    fn test_failed_write_leaves_state() {
        let mut feedback = CopyFeedback::new();
        let mut notices = Notices::new();
        feedback.mark("Email");
        let before = feedback.clone();

        let ticket = feedback.record(
            "Phone",
            Err(ClipboardError::Denied("NotAllowedError".to_string())),
            &mut notices,
        );
        assert_eq!(ticket, None);
        assert_eq!(feedback, before);

        let failures = notices
            .iter()
            .filter(|n| n.kind == NoticeKind::Failure)
            .collect::<Vec<_>>();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].title, "Copy failed");
        assert_eq!(notices.len(), 1);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_unavailable_clipboard_outside_browser() {
        let result = block_on_ready(write_text("test@example.com"));
        assert_eq!(result, Err(ClipboardError::Unavailable));
    }

    // write_text has no await points off the browser, so one poll resolves it
    #[cfg(not(feature = "hydrate"))]
    fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("write_text should resolve immediately"),
        }
    }
}
