//! Generated stylesheet
//!
//! Collects style blocks for one file and renders them as a single
//! `StyleSheet.create({...})` declaration appended to the end of the file.

use indexmap::IndexMap;
use std::collections::HashMap;

/// Binding used when the preferred one is already taken
pub const FALLBACK_BINDING: &str = "migratedStyles";

/// Per-file style accumulator.
#[derive(Debug, Clone)]
pub struct StyleSheetEmitter {
    binding: String,
    blocks: IndexMap<String, IndexMap<String, String>>,
    counters: HashMap<String, usize>,
}

impl StyleSheetEmitter {
    pub fn new(binding: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
            blocks: IndexMap::new(),
            counters: HashMap::new(),
        }
    }

    /// Pick the stylesheet binding: `preferred` unless `is_taken` says the
    /// file already uses it.
    pub fn choose_binding(preferred: &str, is_taken: impl Fn(&str) -> bool) -> String {
        if !is_taken(preferred) {
            return preferred.to_string();
        }
        if !is_taken(FALLBACK_BINDING) {
            return FALLBACK_BINDING.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}{}", FALLBACK_BINDING, n);
            if !is_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Allocate a new block name, `<kind><n>` with `n` counted per kind.
    pub fn declare(&mut self, kind: &str) -> String {
        let kind = kind.to_lowercase();
        let counter = self.counters.entry(kind.clone()).or_insert(0);
        let name = format!("{}{}", kind, counter);
        *counter += 1;
        self.blocks.insert(name.clone(), IndexMap::new());
        name
    }

    /// Add a property; the first value for a key wins.
    pub fn add_property(&mut self, block: &str, key: &str, value: impl Into<String>) {
        if let Some(props) = self.blocks.get_mut(block) {
            props.entry(key.to_string()).or_insert_with(|| value.into());
        }
    }

    /// `styles.box0`
    pub fn reference(&self, block: &str) -> String {
        format!("{}.{}", self.binding, block)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(|k| k.as_str())
    }

    /// Render the declaration, or `None` when no block was declared.
    pub fn render(&self) -> Option<String> {
        if self.blocks.is_empty() {
            return None;
        }
        let mut out = format!("const {} = StyleSheet.create({{\n", self.binding);
        for (name, props) in &self.blocks {
            out.push_str(&format!("  {}: {{\n", name));
            for (key, value) in props {
                out.push_str(&format!("    {}: {},\n", key, value));
            }
            out.push_str("  },\n");
        }
        out.push_str("});\n");
        Some(out)
    }

    /// Text to append at the end of `source`, separated by a blank line.
    pub fn render_appendix(&self, source: &str) -> Option<String> {
        let block = self.render()?;
        let lead = if source.is_empty() || source.ends_with('\n') { "\n" } else { "\n\n" };
        Some(format!("{}{}", lead, block))
    }
}
