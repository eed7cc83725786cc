use contracts::poster::Asset;
use leptos::prelude::*;

/// PageHeader component - wave divider plus page title.
///
/// Used by every view except Home, which opens with the hero instead.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Show the wave banner above the title
    #[prop(optional)]
    divider: bool,
) -> impl IntoView {
    let wave = Asset::Wave;

    view! {
        {divider.then(|| view! {
            <div class="wave-container">
                <img class="wave" src={wave.url()} alt={wave.alt()} />
            </div>
        })}
        <h1 class="heading h1 page-title">{title}</h1>
    }
}
