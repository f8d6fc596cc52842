use contracts::shared::date_range::format::{format_range_display, parse_iso};
use contracts::shared::date_range::DateRange;
use leptos::prelude::*;

use crate::shared::browser::url_query::current_range_query;
use crate::shared::components::DateRangePicker;

/// Report page hosting the period filter.
#[component]
pub fn App() -> impl IntoView {
    // Range the page was opened with, if the URL carries one
    let url_period = current_range_query()
        .and_then(|query| query.parse_range())
        .map(|range| format_range_display(&range));
    let period = RwSignal::new(url_period);

    let on_change = Callback::new(move |(from, to): (String, String)| {
        log::info!("Report period changed: {} .. {}", from, to);
        if let (Some(start), Some(end)) = (parse_iso(&from), parse_iso(&to)) {
            period.set(Some(format_range_display(&DateRange::new(start, end))));
        }
    });

    view! {
        <div class="app-layout">
            <div class="app-main">
                <h1 class="page__title">"Quiz attempts"</h1>
                <DateRangePicker
                    storage_key="quiz-attempts-range"
                    label="Period".to_string()
                    on_change=on_change
                />
                <p class="page__hint">
                    {move || match period.get() {
                        Some(p) => format!("Showing attempts for {}", p),
                        None => "Showing attempts for the default period".to_string(),
                    }}
                </p>
            </div>
        </div>
    }
}
