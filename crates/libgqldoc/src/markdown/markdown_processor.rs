use crate::markdown::admonition_pass;
use crate::markdown::highlight_pass;
use crate::markdown::mermaid_pass;
use crate::markdown::tabbed_content_pass;
use crate::markdown::TabSetCounter;

/// Expands the custom markdown dialect into HTML fragments.
///
/// The processor owns the [`TabSetCounter`] used to number tabbed sets, so
/// one processor should be used for a whole documentation build (call
/// [`MarkdownProcessor::reset()`] when a new build starts).
///
/// Passes run in a fixed order: mermaid fences, then `$$generic` tab sets,
/// then `$$TYPE` admonitions, then `==highlight==` spans. Highlight markup
/// inside the bodies emitted by the earlier passes is therefore still
/// expanded.
#[derive(Debug, Default)]
pub struct MarkdownProcessor {
    tab_sets: TabSetCounter,
}
impl MarkdownProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor that continues numbering tab sets from `counter`.
    pub fn with_counter(counter: TabSetCounter) -> Self {
        Self {
            tab_sets: counter,
        }
    }

    pub fn process(&mut self, content: &str) -> String {
        let processed = mermaid_pass::apply(content);
        let processed = tabbed_content_pass::apply(&processed, &mut self.tab_sets);
        let processed = admonition_pass::apply(&processed);
        highlight_pass::apply(&processed)
    }

    /// Restarts tab-set numbering. Only call this at the start of a build.
    pub fn reset(&mut self) {
        log::trace!(
            "Resetting tab-set numbering (last issued id: {}).",
            self.tab_sets.last_id(),
        );
        self.tab_sets.reset();
    }

    pub fn tab_sets(&self) -> &TabSetCounter {
        &self.tab_sets
    }
}
