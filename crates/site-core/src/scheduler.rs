//! Single frame-tick source shared by every per-frame consumer.
//!
//! The host drives [`FrameScheduler::tick`] once per rendered frame with the
//! time since the previous frame. Consumers run in registration order and are
//! dropped as soon as they report [`Flow::Done`]; nothing else owns a timer, so
//! there is nothing to leak or double-start.

use std::time::Duration;

/// Whether a consumer wants further frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConsumerId(u64);

type Consumer = Box<dyn FnMut(Duration) -> Flow>;

#[derive(Default)]
pub struct FrameScheduler {
    consumers: Vec<(ConsumerId, &'static str, Consumer)>,
    next_id: u64,
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field(
                "consumers",
                &self.consumers.iter().map(|(id, name, _)| (*id, *name)).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a per-frame consumer. `name` only appears in logs.
    pub fn register(
        &mut self,
        name: &'static str,
        consumer: impl FnMut(Duration) -> Flow + 'static,
    ) -> ConsumerId {
        let id = ConsumerId(self.next_id);
        self.next_id += 1;
        self.consumers.push((id, name, Box::new(consumer)));
        log::debug!("[frame] registered {} ({:?})", name, id);
        id
    }

    /// Remove a consumer before it finishes. Returns `false` if it was
    /// already gone.
    pub fn cancel(&mut self, id: ConsumerId) -> bool {
        let before = self.consumers.len();
        self.consumers.retain(|(cid, _, _)| *cid != id);
        before != self.consumers.len()
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    /// Run every consumer once with the frame delta.
    pub fn tick(&mut self, dt: Duration) {
        self.consumers.retain_mut(|(id, name, consumer)| match consumer(dt) {
            Flow::Continue => true,
            Flow::Done => {
                log::debug!("[frame] {} ({:?}) done", name, id);
                false
            }
        });
    }
}
