//! Event System
//!
//! The simulation never calls the presenter while it is updating. It queues
//! what happened, and the queue is drained into presenter calls once per
//! frame after the update.

use super::station::StationId;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation requests emitted by the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentEvent {
    /// Open the detail modal for a station
    ShowDetail(StationId),
    HideDetail,
    ShowAbout,
    HideAbout,
}

/// Events coming back from the presentation layer (clicks on overlays)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Close button or backdrop click on the detail modal
    CloseDetail,
    OpenAbout,
    CloseAbout,
    /// A link button was clicked
    OpenLink(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert!(!queue.is_empty());

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }
}
