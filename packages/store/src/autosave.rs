use std::time::{Duration, Instant};

/// Debounced auto-save trigger.
///
/// Every edit calls [`Autosave::touch`], which replaces the pending
/// deadline with `now + delay`, so continued editing keeps pushing the
/// save out instead of queueing multiple saves. The owning event loop polls
/// [`Autosave::fire_due`] and, when it reports true, saves the document as
/// it is at fire time.
///
/// Pure `Instant` arithmetic: no timer thread, matching the
/// single-threaded, event-driven mutation model of the editor.
#[derive(Debug, Clone)]
pub struct Autosave {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Autosave {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(30);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an edit: (re)schedule the save for `now + delay`.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True exactly once when the deadline has passed; clears the schedule.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending save (page switch, explicit save).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_the_delay() {
        let mut autosave = Autosave::new(Duration::from_secs(30));
        let start = Instant::now();

        autosave.touch(start);
        assert!(!autosave.fire_due(start + Duration::from_secs(29)));
        assert!(autosave.fire_due(start + Duration::from_secs(30)));
        // One-shot: cleared after firing
        assert!(!autosave.fire_due(start + Duration::from_secs(31)));
        assert!(!autosave.is_scheduled());
    }

    #[test]
    fn touch_extends_the_deadline() {
        let mut autosave = Autosave::new(Duration::from_secs(30));
        let start = Instant::now();

        autosave.touch(start);
        autosave.touch(start + Duration::from_secs(20));

        // The original deadline passes without firing
        assert!(!autosave.fire_due(start + Duration::from_secs(35)));
        assert!(autosave.fire_due(start + Duration::from_secs(50)));
    }

    #[test]
    fn cancel_drops_the_pending_save() {
        let mut autosave = Autosave::new(Duration::from_secs(30));
        let start = Instant::now();

        autosave.touch(start);
        autosave.cancel();
        assert!(!autosave.fire_due(start + Duration::from_secs(60)));
    }
}
