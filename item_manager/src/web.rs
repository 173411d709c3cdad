use std::rc::Rc;

use leptos::*;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::api::HttpItemApi;
use crate::config::ClientConfig;
use crate::controller::ItemController;
use crate::item::{Item, ItemId};
use crate::markup::{self, RowAction};
use crate::view::{Dialogs, FormFields, ItemView};

const CANCEL_CLASS: &str = "btn btn-secondary";
const CANCEL_HIDDEN_CLASS: &str = "btn btn-secondary d-none";

/// Signals backing the list, the form and the cancel button.
#[derive(Clone, Copy)]
struct PageSignals {
    items: RwSignal<Vec<Item>>,
    editing_id: RwSignal<String>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    cancel_visible: RwSignal<bool>,
}

impl PageSignals {
    fn new(cx: Scope) -> Self {
        Self {
            items: create_rw_signal(cx, Vec::new()),
            editing_id: create_rw_signal(cx, String::new()),
            name: create_rw_signal(cx, String::new()),
            description: create_rw_signal(cx, String::new()),
            cancel_visible: create_rw_signal(cx, false),
        }
    }
}

impl ItemView for PageSignals {
    fn render_items(&self, items: &[Item]) {
        self.items.set(items.to_vec());
    }

    fn form_fields(&self) -> FormFields {
        FormFields {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    fn fill_form(&self, id: &ItemId, fields: &FormFields) {
        self.editing_id.set(id.to_string());
        self.name.set(fields.name.clone());
        self.description.set(fields.description.clone());
    }

    fn reset_form(&self) {
        self.editing_id.set(String::new());
        self.name.set(String::new());
        self.description.set(String::new());
    }

    fn set_cancel_visible(&self, visible: bool) {
        self.cancel_visible.set(visible);
    }
}

struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

type PageController = ItemController<HttpItemApi, PageSignals, BrowserDialogs>;

// Resolves a click inside the list to the row button that was hit.
fn clicked_row(target: &Element) -> Option<(RowAction, ItemId)> {
    let action = RowAction::from_class_names(&target.class_name())?;
    let row = target.closest("li").ok().flatten()?;
    let id = row.get_attribute(markup::ROW_ID_ATTR)?;
    Some((action, ItemId::from(id)))
}

#[component]
pub fn App(cx: Scope, config: ClientConfig) -> impl IntoView {
    let page = PageSignals::new(cx);
    let controller: Rc<PageController> = Rc::new(ItemController::new(
        HttpItemApi::new(config),
        page,
        BrowserDialogs,
    ));

    // initial load
    {
        let controller = Rc::clone(&controller);
        spawn_local(async move { controller.refresh().await });
    }

    let on_submit = {
        let controller = Rc::clone(&controller);
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = Rc::clone(&controller);
            spawn_local(async move { controller.submit().await });
        }
    };

    let on_cancel = {
        let controller = Rc::clone(&controller);
        move |_: ev::MouseEvent| controller.cancel_edit()
    };

    let on_list_click = move |ev: ev::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some((action, id)) = clicked_row(&target) else {
            return;
        };
        match action {
            RowAction::Edit => controller.begin_edit(&id),
            RowAction::Delete => {
                let controller = Rc::clone(&controller);
                spawn_local(async move { controller.delete(&id).await });
            }
        }
    };

    view! { cx,
        <div class="container my-4">
            <h2 class="mb-4">"Item Manager"</h2>
            <form id="itemForm" class="mb-4" on:submit=on_submit>
                <input type="hidden" id="itemId" prop:value=move || page.editing_id.get()/>
                <div class="mb-2">
                    <input type="text" id="name" class="form-control" placeholder="Name"
                        prop:value=move || page.name.get()
                        on:input=move |ev| page.name.set(event_target_value(&ev))/>
                </div>
                <div class="mb-2">
                    <textarea id="description" class="form-control" placeholder="Description"
                        prop:value=move || page.description.get()
                        on:input=move |ev| page.description.set(event_target_value(&ev))>
                    </textarea>
                </div>
                <button type="submit" class="btn btn-primary me-2">"Save"</button>
                <button type="button" id="cancelEdit"
                    class=move || if page.cancel_visible.get() { CANCEL_CLASS } else { CANCEL_HIDDEN_CLASS }
                    on:click=on_cancel>"Cancel"</button>
            </form>
            <ul id="itemList" class="list-group" on:click=on_list_click>
                {move || {
                    page.items.get().iter().map(|item| {
                        let id = item.id.to_string();
                        let body = markup::row_body(item);
                        view! { cx, <li class=markup::ROW_CLASS data-id=id inner_html=body></li> }.into_view(cx)
                    }).collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

fn init_logging() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::DEBUG);
    // a second init (hot reload) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(console).try_init();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    let config = ClientConfig::from_build_env()
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    info!(endpoint = %config.endpoint(), "mounting item manager");
    mount_to_body(move |cx| view! { cx, <App config=config/> });
    Ok(())
}
