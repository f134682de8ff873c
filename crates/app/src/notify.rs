use std::time::Duration;

use dioxus::prelude::*;
use shared_ui::{ToastOptions, Toasts};

/// How long a loading notice stays up; a failure gets its own toast.
const LOADING_TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Sink for the transient messages the dashboards raise.
///
/// The app implements it with the toast system; tests record instead.
pub trait Notifier {
    /// A request has started.
    fn loading(&self, message: &str);
    /// A request failed; `message` is already user-facing.
    fn failure(&self, message: &str);
}

// Toasts are raised from their own task so the toast list never becomes a
// dependency of a resource that reports through them.
impl Notifier for Toasts {
    fn loading(&self, message: &str) {
        let toasts = self.clone();
        let message = message.to_string();
        spawn(async move {
            toasts.info(
                message,
                ToastOptions::new().duration(LOADING_TOAST_DURATION),
            );
        });
    }

    fn failure(&self, message: &str) {
        let toasts = self.clone();
        let message = message.to_string();
        spawn(async move {
            toasts.error(message, ToastOptions::new());
        });
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Notice, Recorder};
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let rec = Recorder::default();
        rec.loading("Loading admin details...");
        rec.failure("Invalid token");
        assert_eq!(
            rec.notices(),
            vec![
                Notice::Loading("Loading admin details...".into()),
                Notice::Failure("Invalid token".into()),
            ]
        );
        assert_eq!(rec.failures(), vec!["Invalid token".to_string()]);
    }

    #[test]
    fn loading_notice_expires_quickly() {
        assert!(LOADING_TOAST_DURATION <= Duration::from_secs(2));
        assert!(!LOADING_TOAST_DURATION.is_zero());
    }
}
