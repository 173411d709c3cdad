//! Fakes for the controller's collaborators. Each fake is a cheap handle over
//! shared state so a test can keep one copy and hand another to the controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use reqwest::Method;

use crate::api::ItemApi;
use crate::error::ApiError;
use crate::item::{Item, ItemDraft, ItemId};
use crate::view::{Dialogs, FormFields, ItemView};

pub(crate) fn item(id: &str, name: &str, description: &str) -> Item {
    Item {
        id: ItemId::from(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn server_error(method: Method) -> ApiError {
    ApiError::Status {
        method,
        url: "http://localhost:3000/items".to_string(),
        status: 500,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Create(ItemDraft),
    Update(ItemId, ItemDraft),
    Delete(ItemId),
}

#[derive(Default)]
pub(crate) struct ApiState {
    pub calls: RefCell<Vec<Call>>,
    pub items: RefCell<Vec<Item>>,
    pub fail_list: Cell<bool>,
    pub fail_mutations: Cell<bool>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeApi(pub Rc<ApiState>);

impl FakeApi {
    pub fn with_items(items: Vec<Item>) -> Self {
        let api = Self::default();
        *api.0.items.borrow_mut() = items;
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.0.calls.borrow_mut().clear();
    }

    fn mutation(&self, call: Call, method: Method) -> Result<(), ApiError> {
        self.0.calls.borrow_mut().push(call);
        if self.0.fail_mutations.get() {
            return Err(server_error(method));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ItemApi for FakeApi {
    async fn list(&self) -> Result<Vec<Item>, ApiError> {
        self.0.calls.borrow_mut().push(Call::List);
        if self.0.fail_list.get() {
            return Err(server_error(Method::GET));
        }
        Ok(self.0.items.borrow().clone())
    }

    async fn create(&self, draft: &ItemDraft) -> Result<(), ApiError> {
        self.mutation(Call::Create(draft.clone()), Method::POST)
    }

    async fn update(&self, id: &ItemId, draft: &ItemDraft) -> Result<(), ApiError> {
        self.mutation(Call::Update(id.clone(), draft.clone()), Method::PUT)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ApiError> {
        self.mutation(Call::Delete(id.clone()), Method::DELETE)
    }
}

#[derive(Default)]
pub(crate) struct ViewState {
    /// `None` until the first render.
    pub rendered: RefCell<Option<Vec<Item>>>,
    pub form: RefCell<FormFields>,
    pub hidden_id: RefCell<String>,
    pub cancel_visible: Cell<bool>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeView(pub Rc<ViewState>);

impl FakeView {
    pub fn type_into_form(&self, name: &str, description: &str) {
        *self.0.form.borrow_mut() = FormFields {
            name: name.to_string(),
            description: description.to_string(),
        };
    }

    pub fn form(&self) -> FormFields {
        self.0.form.borrow().clone()
    }

    pub fn hidden_id(&self) -> String {
        self.0.hidden_id.borrow().clone()
    }

    pub fn rendered(&self) -> Option<Vec<Item>> {
        self.0.rendered.borrow().clone()
    }

    pub fn cancel_visible(&self) -> bool {
        self.0.cancel_visible.get()
    }
}

impl ItemView for FakeView {
    fn render_items(&self, items: &[Item]) {
        *self.0.rendered.borrow_mut() = Some(items.to_vec());
    }

    fn form_fields(&self) -> FormFields {
        self.form()
    }

    fn fill_form(&self, id: &ItemId, fields: &FormFields) {
        *self.0.hidden_id.borrow_mut() = id.to_string();
        *self.0.form.borrow_mut() = fields.clone();
    }

    fn reset_form(&self) {
        self.0.hidden_id.borrow_mut().clear();
        *self.0.form.borrow_mut() = FormFields::default();
    }

    fn set_cancel_visible(&self, visible: bool) {
        self.0.cancel_visible.set(visible);
    }
}

pub(crate) struct DialogState {
    pub alerts: RefCell<Vec<String>>,
    pub confirms: Cell<usize>,
    pub answer: Cell<bool>,
}

#[derive(Clone)]
pub(crate) struct FakeDialogs(pub Rc<DialogState>);

impl FakeDialogs {
    pub fn answering(answer: bool) -> Self {
        Self(Rc::new(DialogState {
            alerts: RefCell::new(Vec::new()),
            confirms: Cell::new(0),
            answer: Cell::new(answer),
        }))
    }

    pub fn alerts(&self) -> Vec<String> {
        self.0.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> usize {
        self.0.confirms.get()
    }
}

impl Dialogs for FakeDialogs {
    fn alert(&self, message: &str) {
        self.0.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        self.0.confirms.set(self.0.confirms.get() + 1);
        self.0.answer.get()
    }
}
