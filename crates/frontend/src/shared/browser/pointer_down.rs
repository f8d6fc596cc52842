use contracts::shared::outside_click::{ContainsTarget, PointerDownSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const POINTER_DOWN: &str = "pointerdown";

/// Element taking part in an outside-click region.
#[derive(Clone)]
pub struct RegionElement(pub web_sys::Element);

impl ContainsTarget<web_sys::Node> for RegionElement {
    fn contains_target(&self, target: &web_sys::Node) -> bool {
        self.0.contains(Some(target))
    }
}

/// `pointerdown` on the document, in the capture phase so it runs before
/// any click handler of the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPointerDown;

/// Registered document listener; removed on drop.
pub struct DocumentListener {
    document: web_sys::Document,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            POINTER_DOWN,
            self.closure.as_ref().unchecked_ref(),
            true,
        );
    }
}

impl PointerDownSource for DocumentPointerDown {
    type Target = web_sys::Node;
    /// `None` when there is no document to listen on.
    type Listener = Option<DocumentListener>;

    fn attach(&self, mut handler: Box<dyn FnMut(&web_sys::Node)>) -> Self::Listener {
        let document = web_sys::window().and_then(|w| w.document())?;

        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(node) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            {
                handler(&node);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) = document.add_event_listener_with_callback_and_bool(
            POINTER_DOWN,
            closure.as_ref().unchecked_ref(),
            true,
        ) {
            log::warn!("Could not listen for outside clicks: {:?}", err);
            return None;
        }
        Some(DocumentListener { document, closure })
    }
}
