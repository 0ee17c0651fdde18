use std::time::Duration;

/// Ordered list of events at fixed offsets from a start instant.
///
/// Front-ends either dispatch each entry with a one-shot timer or feed
/// elapsed time through [`Timeline::advance`].
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    entries: Vec<(Duration, E)>,
    elapsed: Duration,
    cursor: usize,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            elapsed: Duration::ZERO,
            cursor: 0,
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `event` at `offset`. Entries stay sorted; equal offsets keep
    /// insertion order.
    pub fn at(mut self, offset: Duration, event: E) -> Self {
        let pos = self.entries.partition_point(|(o, _)| *o <= offset);
        self.entries.insert(pos, (offset, event));
        self
    }

    pub fn entries(&self) -> &[(Duration, E)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Duration, E)> {
        self.entries
    }

    /// Offset of the last entry.
    pub fn span(&self) -> Duration {
        self.entries.last().map(|(o, _)| *o).unwrap_or(Duration::ZERO)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// Advance the clock by `dt` and return every event now due, in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<&E> {
        self.elapsed += dt;
        let start = self.cursor;
        while self.cursor < self.entries.len() && self.entries[self.cursor].0 <= self.elapsed {
            self.cursor += 1;
        }
        self.entries[start..self.cursor].iter().map(|(_, e)| e).collect()
    }
}
