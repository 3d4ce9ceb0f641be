//! Search box, dropdowns and specialty chips.

use dioxus::prelude::*;
use listing_core::{FilterChange, OptionLabels, Selection};

/// Props for FilterPanel component.
#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    /// Option labels for every dimension, sentinel first.
    pub options: OptionLabels,
    /// Current selection, used to mark the active options.
    pub selection: Selection,
    /// Called with the new value of whichever control changed.
    pub on_change: EventHandler<FilterChange>,
}

/// Filter controls for the listing.
#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let on_change = props.on_change;
    let region = props.selection.region.to_string();
    let shift = props.selection.shift.to_string();
    let contract = props.selection.contract.to_string();
    let tag = props.selection.tag.to_string();

    rsx! {
        div { class: "filter-panel",
            label { class: "filter-field",
                "Search keywords"
                input {
                    class: "filter-input",
                    value: "{props.selection.query}",
                    placeholder: "Try “automation” or “night shift”",
                    oninput: move |e| on_change.call(FilterChange::Search(e.value())),
                }
            }

            label { class: "filter-field",
                "Region"
                select {
                    class: "filter-input",
                    value: "{region}",
                    onchange: move |e| on_change.call(FilterChange::Region(e.value())),
                    for label in props.options.regions.iter() {
                        option { key: "{label}", value: "{label}", selected: *label == region, "{label}" }
                    }
                }
            }

            label { class: "filter-field",
                "Shift pattern"
                select {
                    class: "filter-input",
                    value: "{shift}",
                    onchange: move |e| on_change.call(FilterChange::Shift(e.value())),
                    for label in props.options.shifts.iter() {
                        option { key: "{label}", value: "{label}", selected: *label == shift, "{label}" }
                    }
                }
            }

            label { class: "filter-field",
                "Contract"
                select {
                    class: "filter-input",
                    value: "{contract}",
                    onchange: move |e| on_change.call(FilterChange::Contract(e.value())),
                    for label in props.options.contracts.iter() {
                        option { key: "{label}", value: "{label}", selected: *label == contract, "{label}" }
                    }
                }
            }

            div { class: "filter-field filter-field-wide",
                "Specialty tags"
                div { class: "chip-row",
                    for label in props.options.tags.iter() {
                        {
                            let active = *label == tag;
                            let value = label.clone();
                            rsx! {
                                button {
                                    key: "{label}",
                                    class: if active { "chip chip-active" } else { "chip" },
                                    onclick: move |_| on_change.call(FilterChange::Tag(value.clone())),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
