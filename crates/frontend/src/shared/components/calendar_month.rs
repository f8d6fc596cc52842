use chrono::{Datelike, NaiveDate};
use contracts::shared::date_range::{
    month_title, CalendarDayCell, CalendarSide, GRID_CELLS, MONTH_NAMES, WEEKDAY_LABELS,
};
use leptos::prelude::*;

/// CSS classes of a day cell.
pub fn day_class(cell: &CalendarDayCell) -> String {
    if cell.is_placeholder {
        return "calendar-month__day calendar-month__day--empty".to_string();
    }

    let mut class = String::from("calendar-month__day");
    let modifiers = [
        (!cell.is_current_month, "other-month"),
        (cell.is_today, "today"),
        (cell.is_in_range, "in-range"),
        (cell.is_range_start, "range-start"),
        (cell.is_range_end, "range-end"),
        (cell.is_disabled, "disabled"),
    ];
    for (_, modifier) in modifiers.iter().filter(|(on, _)| *on) {
        class.push_str(" calendar-month__day--");
        class.push_str(modifier);
    }
    class
}

fn side_class(side: CalendarSide) -> &'static str {
    match side {
        CalendarSide::Left => "calendar-month calendar-month--start",
        CalendarSide::Right => "calendar-month calendar-month--end",
    }
}

/// One month of the range picker: navigation header and the 6×7 day grid.
///
/// Purely presentational; every interaction is reported through callbacks.
#[component]
pub fn CalendarMonth(
    side: CalendarSide,
    /// Displayed month (first day)
    #[prop(into)]
    month: Signal<NaiveDate>,
    /// 42 cells produced for `month`
    #[prop(into)]
    cells: Signal<Vec<CalendarDayCell>>,
    /// Years offered by the year selector
    #[prop(into)]
    years: Signal<Vec<i32>>,
    on_select: Callback<NaiveDate>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    /// (zero-based month, year) from the selectors
    on_jump: Callback<(u32, i32)>,
) -> impl IntoView {
    let title = move || month_title(month.get());

    let on_month_change = move |ev: leptos::ev::Event| {
        if let Ok(month_index) = event_target_value(&ev).parse::<u32>() {
            on_jump.run((month_index, month.get_untracked().year()));
        }
    };

    let on_year_change = move |ev: leptos::ev::Event| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            on_jump.run((month.get_untracked().month0(), year));
        }
    };

    view! {
        <div class=side_class(side) aria-label=title>
            <div class="calendar-month__header">
                <button
                    type="button"
                    class="calendar-month__nav"
                    title="Previous month"
                    on:click=move |_| on_prev.run(())
                >
                    "‹"
                </button>

                <select
                    class="calendar-month__select"
                    prop:value=move || month.get().month0().to_string()
                    on:change=on_month_change
                >
                    {MONTH_NAMES
                        .iter()
                        .enumerate()
                        .map(|(index, name)| view! { <option value=index.to_string()>{*name}</option> })
                        .collect_view()}
                </select>

                <select
                    class="calendar-month__select"
                    prop:value=move || month.get().year().to_string()
                    on:change=on_year_change
                >
                    {move || {
                        years
                            .get()
                            .into_iter()
                            .map(|year| view! { <option value=year.to_string()>{year}</option> })
                            .collect_view()
                    }}
                </select>

                <button
                    type="button"
                    class="calendar-month__nav"
                    title="Next month"
                    on:click=move |_| on_next.run(())
                >
                    "›"
                </button>
            </div>

            <div class="calendar-month__weekdays">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="calendar-month__weekday">{*label}</div> })
                    .collect_view()}
            </div>

            <div class="calendar-month__grid">
                {move || {
                    cells
                        .get()
                        .into_iter()
                        .take(GRID_CELLS)
                        .map(|cell| {
                            let date = cell.date;
                            let selectable = cell.is_selectable;
                            let label = if cell.is_placeholder {
                                String::new()
                            } else {
                                cell.date.day().to_string()
                            };
                            view! {
                                <button
                                    type="button"
                                    class=day_class(&cell)
                                    disabled=cell.is_disabled
                                    on:click=move |_| {
                                        if selectable {
                                            on_select.run(date);
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
