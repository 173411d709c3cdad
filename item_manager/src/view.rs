use crate::item::{Item, ItemDraft, ItemId};

/// Raw contents of the name and description inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub description: String,
}

impl FormFields {
    pub fn draft(&self) -> Option<ItemDraft> {
        ItemDraft::new(&self.name, &self.description)
    }
}

/// The page surface the controller drives: the item list, the edit form and
/// its cancel control.
pub trait ItemView {
    /// Replaces whatever the list currently shows.
    fn render_items(&self, items: &[Item]);
    fn form_fields(&self) -> FormFields;
    /// Loads an existing item into the form, including the hidden id field.
    fn fill_form(&self, id: &ItemId, fields: &FormFields);
    /// Clears every form field, the hidden id included.
    fn reset_form(&self);
    fn set_cancel_visible(&self, visible: bool);
}

/// Blocking user dialogs.
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}
