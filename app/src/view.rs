//! Pure render functions. Each takes data and returns the text to print;
//! nothing here reads input or talks to the network.

use onelist_core::{Item, ItemStore};

/// One line per item: checkbox, id, title.
pub fn item_row(item: &Item) -> String {
    let mark = if item.completed { "x" } else { " " };
    format!("[{mark}] {:>3}  {}", item.id, item.title)
}

pub fn list(items: &[Item]) -> String {
    items.iter().map(item_row).collect::<Vec<_>>().join("\n")
}

/// `1 item left` / `n items left`, counting open items.
pub fn footer(remaining: usize) -> String {
    let noun = if remaining == 1 { "item" } else { "items" };
    format!("{remaining} {noun} left")
}

/// The whole page: list plus footer. An empty store renders nothing at all,
/// so a fresh session shows only the prompt until the first item exists.
pub fn page(store: &ItemStore) -> String {
    if store.is_empty() {
        return String::new();
    }
    format!("{}\n{}\n", list(store.items()), footer(store.remaining()))
}
