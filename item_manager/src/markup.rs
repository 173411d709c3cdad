//! Row markup for the rendered item list.
//!
//! Each row is an `<li>` carrying the item id in [`ROW_ID_ATTR`]; its body holds
//! the escaped name and description plus Edit/Delete buttons. Clicks are
//! dispatched by the list container, which maps the clicked button's classes
//! back to a [`RowAction`].

use crate::escape::escape_html;
use crate::item::Item;

pub const ROW_CLASS: &str = "list-group-item d-flex justify-content-between align-items-start";
pub const ROW_ID_ATTR: &str = "data-id";
pub const EDIT_BUTTON_CLASS: &str = "edit-btn";
pub const DELETE_BUTTON_CLASS: &str = "delete-btn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    /// Maps an element's `class` attribute to the row button it denotes.
    pub fn from_class_names(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| match class {
            EDIT_BUTTON_CLASS => Some(Self::Edit),
            DELETE_BUTTON_CLASS => Some(Self::Delete),
            _ => None,
        })
    }
}

/// Inner HTML of a row.
pub fn row_body(item: &Item) -> String {
    format!(
        concat!(
            r#"<div><h5 class="mb-1">{name}</h5><p class="mb-1">{description}</p></div>"#,
            r#"<div><button type="button" class="btn btn-sm btn-warning me-2 {edit}">Edit</button>"#,
            r#"<button type="button" class="btn btn-sm btn-danger {delete}">Delete</button></div>"#,
        ),
        name = escape_html(&item.name),
        description = escape_html(&item.description),
        edit = EDIT_BUTTON_CLASS,
        delete = DELETE_BUTTON_CLASS,
    )
}
