use crate::constants::HIDDEN_CLASS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("<{tag}> has unexpected type: {:?}", e))
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("appendChild: {:?}", e))
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("addEventListener({event}): {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1(HIDDEN_CLASS)
    } else {
        cl.remove_1(HIDDEN_CLASS)
    };
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
