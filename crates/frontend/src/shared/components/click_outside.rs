use contracts::shared::outside_click::{OutsideClickBinding, OutsideClickRegion};
use leptos::html;
use leptos::prelude::*;

use crate::shared::browser::{DocumentPointerDown, RegionElement};

type Binding = OutsideClickBinding<DocumentPointerDown, RegionElement>;

/// Wrapper calling `on_click_outside` when a pointer goes down outside of it.
///
/// The document listener only exists while `active` is true and is removed
/// when the component unmounts. Elements in `exclude` (e.g. the trigger
/// that opened a popup) count as inside.
#[component]
pub fn ClickOutside(
    /// Listen only while true
    #[prop(into)]
    active: Signal<bool>,
    /// Called once per pointer-down outside the wrapper and exclusions
    on_click_outside: Callback<()>,
    /// Elements treated as inside
    #[prop(optional)]
    exclude: Vec<NodeRef<html::Div>>,
    /// Additional CSS classes for the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let root_ref = NodeRef::<html::Div>::new();
    let binding = StoredValue::new_local(None::<Binding>);

    Effect::new(move |_| {
        let is_active = active.get();
        let Some(root) = root_ref.get() else {
            return;
        };

        if is_active && binding.with_value(|b| b.is_none()) {
            let region = exclude
                .iter()
                .filter_map(|node_ref| node_ref.get_untracked())
                .fold(OutsideClickRegion::new(RegionElement(root.into())), |region, el| {
                    region.exclude(RegionElement(el.into()))
                });
            binding.set_value(Some(OutsideClickBinding::new(
                DocumentPointerDown,
                region,
                move || on_click_outside.run(()),
            )));
        }

        binding.update_value(|b| {
            if let Some(b) = b {
                b.set_active(is_active);
            }
        });
    });

    on_cleanup(move || {
        binding.try_update_value(|b| *b = None);
    });

    let wrapper_class = move || format!("click-outside {}", class.get().unwrap_or_default());

    view! {
        <div node_ref=root_ref class=wrapper_class>
            {children()}
        </div>
    }
}
