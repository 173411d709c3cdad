use std::cell::RefCell;
use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::api::ItemApi;
use crate::error::ApiError;
use crate::item::{Item, ItemId};
use crate::view::{Dialogs, FormFields, ItemView};

pub const LOAD_FAILED: &str = "Error loading items.";
pub const SAVE_FAILED: &str = "Failed to save item.";
pub const DELETE_FAILED: &str = "Failed to delete item.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this item?";

/// Whether the form is creating a new item or editing an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(ItemId),
}

impl EditSession {
    pub fn editing_id(&self) -> Option<&ItemId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }
}

/// Drives list/create/update/delete against an [`ItemApi`] and reflects the
/// results on an [`ItemView`].
///
/// Every successful mutation is followed by a full [`refresh`](Self::refresh).
/// Failures are reported once through [`Dialogs::alert`] and logged; nothing
/// else changes. State cells are never borrowed across an `.await`.
pub struct ItemController<A, V, D> {
    api: A,
    view: V,
    dialogs: D,
    session: RefCell<EditSession>,
    // last fetched list in render order, source of the edit form
    records: RefCell<Vec<Item>>,
}

impl<A, V, D> ItemController<A, V, D>
where
    A: ItemApi,
    V: ItemView,
    D: Dialogs,
{
    pub fn new(api: A, view: V, dialogs: D) -> Self {
        Self {
            api,
            view,
            dialogs,
            session: RefCell::new(EditSession::Idle),
            records: RefCell::new(Vec::new()),
        }
    }

    pub fn session(&self) -> EditSession {
        self.session.borrow().clone()
    }

    /// Fetches the whole collection and re-renders the list.
    pub async fn refresh(&self) {
        match self.api.list().await {
            Ok(items) => {
                debug!(count = items.len(), "items loaded");
                let distinct = items.iter().map(|item| &item.id).collect::<HashSet<_>>().len();
                if distinct < items.len() {
                    warn!(
                        count = items.len(),
                        distinct,
                        "listed items share ids; edit uses the first row for each id"
                    );
                }
                self.view.render_items(&items);
                *self.records.borrow_mut() = items;
            }
            Err(error) => self.report(LOAD_FAILED, &error),
        }
    }

    /// Creates a new item, or updates the one being edited, from the form.
    /// Does nothing if the name or description is blank.
    pub async fn submit(&self) {
        let Some(draft) = self.view.form_fields().draft() else {
            debug!("form incomplete, nothing submitted");
            return;
        };

        let editing = self.session.borrow().editing_id().cloned();
        let result = match &editing {
            Some(id) => self.api.update(id, &draft).await,
            None => self.api.create(&draft).await,
        };

        match result {
            Ok(()) => {
                match &editing {
                    Some(id) => info!(%id, "item updated"),
                    None => info!(name = %draft.name, "item created"),
                }
                self.end_edit();
                self.refresh().await;
            }
            Err(error) => self.report(SAVE_FAILED, &error),
        }
    }

    /// Loads a listed item into the form and enters edit mode.
    pub fn begin_edit(&self, id: &ItemId) {
        let found = self.records.borrow().iter().find(|item| &item.id == id).cloned();
        let Some(item) = found else {
            warn!(%id, "edit requested for an item missing from the last fetched list");
            return;
        };

        let fields = FormFields {
            name: item.name,
            description: item.description,
        };
        self.view.fill_form(id, &fields);
        self.view.set_cancel_visible(true);
        *self.session.borrow_mut() = EditSession::Editing(id.clone());
    }

    pub fn cancel_edit(&self) {
        self.end_edit();
    }

    /// Deletes an item after the user confirms.
    pub async fn delete(&self, id: &ItemId) {
        if !self.dialogs.confirm(CONFIRM_DELETE) {
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!(%id, "item deleted");
                self.refresh().await;
            }
            Err(error) => self.report(DELETE_FAILED, &error),
        }
    }

    fn end_edit(&self) {
        self.view.reset_form();
        self.view.set_cancel_visible(false);
        *self.session.borrow_mut() = EditSession::Idle;
    }

    fn report(&self, message: &str, error: &ApiError) {
        error!(%error, "{message}");
        self.dialogs.alert(message);
    }
}
