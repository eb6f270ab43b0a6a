//! Type-discriminator tab strip for preview lists.

use leptos::prelude::*;

/// Horizontal tab strip: an "all" tab followed by one tab per discriminator
/// value. Selecting a tab reports `None` (all) or `Some(value)`.
#[component]
pub fn FilterTabs(
    /// (discriminator value, label) pairs in display order.
    options: Vec<(&'static str, &'static str)>,
    /// Label for the unfiltered tab.
    #[prop(default = "All")]
    all_label: &'static str,
    active: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    let tabs: Vec<(Option<&'static str>, &'static str)> = std::iter::once((None, all_label))
        .chain(options.into_iter().map(|(value, label)| (Some(value), label)))
        .collect();

    view! {
        <div class="filter-tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|(value, label)| {
                    let is_active = move || active.get().as_deref() == value;
                    view! {
                        <button
                            class="filter-tabs__tab"
                            class:filter-tabs__tab--active=is_active
                            role="tab"
                            on:click=move |_| on_select.run(value.map(str::to_owned))
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
