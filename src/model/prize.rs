use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeItem {
    pub name: String,
    pub content: String,
}

impl PrizeItem {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// True when neither field carries any visible text.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.content.clear();
    }
}

/// Ordered prize rows. Always holds at least one entry so the form
/// has a row to type into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeList {
    items: Vec<PrizeItem>,
}

impl Default for PrizeList {
    fn default() -> Self {
        Self {
            items: vec![PrizeItem::default()],
        }
    }
}

impl PrizeList {
    pub fn from_items(items: Vec<PrizeItem>) -> Self {
        if items.is_empty() {
            Self::default()
        } else {
            Self { items }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[PrizeItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrizeItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PrizeItem> {
        self.items.iter_mut()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PrizeItem> {
        self.items.get_mut(index)
    }

    pub fn push_blank(&mut self) {
        self.items.push(PrizeItem::default());
    }

    /// Inserts before `index`; an index past the end appends.
    pub fn insert(&mut self, index: usize, item: PrizeItem) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Replaces the row at `index`. Returns false when out of range.
    pub fn set(&mut self, index: usize, item: PrizeItem) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Removes the row at `index`. The last remaining row is cleared instead.
    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        if self.items.len() == 1 {
            self.items[0].clear();
        } else {
            self.items.remove(index);
        }
    }

    /// Rows worth mentioning in the prompt, in form order.
    pub fn filled(&self) -> impl Iterator<Item = &PrizeItem> {
        self.items.iter().filter(|p| !p.is_blank())
    }
}
