/// Hands out the ids used to keep the `id`/`name` attributes of generated
/// tabbed sets unique.
///
/// Ids increase monotonically for the lifetime of the counter. A single
/// counter is meant to span one whole documentation build, and
/// [`TabSetCounter::reset()`] should only be called when a new build starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabSetCounter {
    last_id: u32,
}
impl TabSetCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently issued id (`0` if none has been issued yet).
    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// Issues the next id. The first id issued after construction or a reset
    /// is `1`.
    pub fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }

    pub fn reset(&mut self) {
        self.last_id = 0;
    }
}
