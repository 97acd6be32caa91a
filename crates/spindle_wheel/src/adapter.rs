//! Adapter bridge: the engine's view of the backing item data
//!
//! The engine holds a non-owning reference to the adapter and re-reads it
//! live on each query, so external data-set changes are observed promptly.
//! The host signals structural changes through
//! [`WheelEngine::on_data_set_changed`](crate::WheelEngine::on_data_set_changed).

/// A renderable representation of one item, consumed by the drawing
/// collaborator. The engine itself never inspects the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableItem {
    pub text: String,
}

impl RenderableItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Supplies the item count and per-index renderable representations
pub trait WheelAdapter {
    /// Number of items; zero makes every engine operation a silent no-op
    fn item_count(&self) -> usize;

    /// Item at `index`, or `None` outside `[0, item_count)`
    fn item_at(&self, index: usize) -> Option<RenderableItem>;
}

/// A simple adapter over a list of strings
#[derive(Debug, Clone, Default)]
pub struct TextWheelAdapter {
    items: Vec<String>,
}

impl TextWheelAdapter {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the backing items. The host must follow up with
    /// `WheelEngine::on_data_set_changed` so the engine re-validates its
    /// index.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
    }

    pub fn item_text(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }
}

impl WheelAdapter for TextWheelAdapter {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<RenderableItem> {
        self.items.get(index).map(RenderableItem::new)
    }
}
