use chrono::NaiveDate;
use contracts::shared::date_range::format::format_iso;
use contracts::shared::date_range::{
    list_presets, CalendarSide, DateRangePickerController, PickerConfig, PresetKey, SystemClock,
};
use leptos::html;
use leptos::prelude::*;
use thaw::*;

use super::calendar_month::CalendarMonth;
use super::click_outside::ClickOutside;
use crate::shared::browser::{BrowserQuery, LocalStorage};

type Picker = DateRangePickerController<LocalStorage, SystemClock>;

/// DateRangePicker component - reusable period picker for report pages.
/// Trigger input with the current range; the panel holds the preset list,
/// start (left) and end (right) calendars and the Save / Clear actions.
/// Save writes `start_date`/`end_date` (YYYYMMDD) to the page URL and,
/// when "Remember this filter" is checked, keeps the filter in localStorage.
#[component]
pub fn DateRangePicker(
    /// localStorage key of the saved filter (default "datepicker-default")
    #[prop(optional, into)]
    storage_key: Option<String>,

    /// Show days of adjacent months instead of empty cells
    #[prop(optional)]
    show_other_month_days: bool,

    /// Callback after Save with the committed range (from, to) in yyyy-mm-dd format
    #[prop(optional)]
    on_change: Option<Callback<(String, String)>>,

    /// Optional label above the trigger
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let mut config = storage_key
        .map(PickerConfig::with_storage_key)
        .unwrap_or_default();
    config.hide_other_month_days = !show_other_month_days;

    let picker: RwSignal<Picker> =
        RwSignal::new(DateRangePickerController::mount(config, LocalStorage, SystemClock));
    let trigger_ref = NodeRef::<html::Div>::new();

    let is_open = Memo::new(move |_| picker.with(|p| p.is_open()));
    let display_text = Memo::new(move |_| picker.with(|p| p.display_text()));
    let selected_preset = Memo::new(move |_| picker.with(|p| p.state().selected_preset));
    let save_filter = Memo::new(move |_| picker.with(|p| p.state().save_filter));
    let left_month = Memo::new(move |_| picker.with(|p| p.state().left_month));
    let right_month = Memo::new(move |_| picker.with(|p| p.state().right_month));
    let left_cells = Memo::new(move |_| picker.with(|p| p.left_grid()));
    let right_cells = Memo::new(move |_| picker.with(|p| p.right_grid()));
    let years = Memo::new(move |_| picker.with(|p| p.year_window().years().collect::<Vec<_>>()));

    // Handlers: one `update` per user event, so repairs land in the same render
    let on_preset = move |key: PresetKey| picker.update(|p| p.select_preset(key));

    let on_select = move |side: CalendarSide| {
        Callback::new(move |date: NaiveDate| picker.update(|p| p.select_day(side, date)))
    };
    let on_prev = move |side: CalendarSide| {
        Callback::new(move |_: ()| picker.update(|p| p.prev_month(side)))
    };
    let on_next = move |side: CalendarSide| {
        Callback::new(move |_: ()| picker.update(|p| p.next_month(side)))
    };
    let on_jump = move |side: CalendarSide| {
        Callback::new(move |(month_index, year): (u32, i32)| {
            picker.update(|p| {
                if !p.jump_to(side, month_index, year) {
                    log::debug!("Ignoring month selection {}/{}", month_index + 1, year);
                }
            })
        })
    };

    let on_save = move |_| {
        picker.update(|p| {
            p.save(&mut BrowserQuery);
        });
        if let Some(on_change) = on_change {
            let range = picker.with_untracked(|p| p.committed_range());
            on_change.run((format_iso(range.start), format_iso(range.end)));
        }
    };

    let on_clear = move |_| picker.update(|p| p.clear());

    let on_dismiss = Callback::new(move |_: ()| {
        picker.update(|p| {
            p.dismiss();
        })
    });

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <ClickOutside
                active=is_open
                on_click_outside=on_dismiss
                exclude=vec![trigger_ref]
                class="date-range-picker"
            >
                <div
                    node_ref=trigger_ref
                    class="date-range-picker__trigger"
                    on:click=move |_| picker.update(|p| p.toggle())
                >
                    <input
                        type="text"
                        readonly=true
                        class="date-range-picker__input"
                        prop:value=move || display_text.get()
                    />
                </div>

                <Show when=move || is_open.get()>
                    <div class="date-range-picker__panel">
                        <div class="date-range-picker__presets">
                            {list_presets()
                                .iter()
                                .map(|preset| {
                                    let key = preset.key;
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=move || {
                                                if selected_preset.get() == key {
                                                    ButtonAppearance::Primary
                                                } else {
                                                    ButtonAppearance::Subtle
                                                }
                                            }
                                            on_click=move |_| on_preset(key)
                                        >
                                            {preset.label}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Flex gap=FlexGap::Large>
                            <CalendarMonth
                                side=CalendarSide::Left
                                month=left_month
                                cells=left_cells
                                years=years
                                on_select=on_select(CalendarSide::Left)
                                on_prev=on_prev(CalendarSide::Left)
                                on_next=on_next(CalendarSide::Left)
                                on_jump=on_jump(CalendarSide::Left)
                            />
                            <CalendarMonth
                                side=CalendarSide::Right
                                month=right_month
                                cells=right_cells
                                years=years
                                on_select=on_select(CalendarSide::Right)
                                on_prev=on_prev(CalendarSide::Right)
                                on_next=on_next(CalendarSide::Right)
                                on_jump=on_jump(CalendarSide::Right)
                            />
                        </Flex>

                        <Flex
                            class="date-range-picker__footer"
                            align=FlexAlign::Center
                            justify=FlexJustify::SpaceBetween
                        >
                            <div class="form__checkbox-wrapper">
                                <input
                                    id="date-range-picker-remember"
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=move || save_filter.get()
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        picker.update(|p| p.set_save_filter(checked));
                                    }
                                />
                                <label class="form__checkbox-label" for="date-range-picker-remember">
                                    "Remember this filter"
                                </label>
                            </div>

                            <ButtonGroup>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=on_clear
                                >
                                    "Clear"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=on_save
                                >
                                    "Save"
                                </Button>
                            </ButtonGroup>
                        </Flex>
                    </div>
                </Show>
            </ClickOutside>
        </Flex>
    }
}
