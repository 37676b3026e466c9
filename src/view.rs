//! Text rendering of the item list.

use crate::model::Item;

pub const HEADING: &str = "Items List";

/// What the list view shows. Exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Failed(String),
    Loaded(Vec<Item>),
}

/// Render a state as plain text. Items keep the order they arrived in.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Failed(message) => format!("Error: {}", message),
        ViewState::Loaded(items) => {
            let mut out = String::from(HEADING);
            out.push('\n');
            for item in items {
                out.push('\n');
                out.push_str(&item.name);
                out.push_str("\n  ");
                out.push_str(&item.description);
                out.push('\n');
            }
            out
        }
    }
}
