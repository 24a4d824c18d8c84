use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Holds at most one visible notice. Showing a new notice cancels any
/// pending dismissal timer from the previous one before scheduling its own,
/// so a stale timer can never clear a fresh message.
pub struct NoticeBoard {
    current: Arc<Mutex<Option<Notice>>>,
    timer: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            timer: None,
            ttl,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.lock().unwrap().clone()
    }

    /// Shows a transient notice that auto-dismisses after the TTL.
    pub fn show(&mut self, notice: Notice) {
        self.cancel_timer();
        *self.current.lock().unwrap() = Some(notice);

        let slot = Arc::clone(&self.current);
        let ttl = self.ttl;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            *slot.lock().unwrap() = None;
        }));
    }

    /// Shows a notice that stays until replaced or cleared. Used for
    /// initial-load failures, which persist until a successful retry.
    pub fn show_sticky(&mut self, notice: Notice) {
        self.cancel_timer();
        *self.current.lock().unwrap() = Some(notice);
    }

    pub fn clear(&mut self) {
        self.cancel_timer();
        *self.current.lock().unwrap() = None;
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for NoticeBoard {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn notices_auto_clear_after_the_ttl() {
        let mut board = NoticeBoard::new(Duration::from_millis(100));
        board.show(Notice::success("uploaded"));
        assert_eq!(board.current(), Some(Notice::success("uploaded")));

        sleep(Duration::from_millis(150)).await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn a_new_notice_cancels_the_previous_timer() {
        let mut board = NoticeBoard::new(Duration::from_millis(100));
        board.show(Notice::success("first"));

        sleep(Duration::from_millis(60)).await;
        board.show(Notice::error("second"));

        // The first notice's timer would have fired here; it must not clear
        // the replacement.
        sleep(Duration::from_millis(60)).await;
        assert_eq!(board.current(), Some(Notice::error("second")));

        sleep(Duration::from_millis(100)).await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn sticky_notices_outlive_the_ttl() {
        let mut board = NoticeBoard::new(Duration::from_millis(100));
        board.show_sticky(Notice::error("could not load"));

        sleep(Duration::from_millis(500)).await;
        assert_eq!(board.current(), Some(Notice::error("could not load")));

        board.clear();
        assert_eq!(board.current(), None);
    }
}
