use leptos::*;

/// Placeholder shown where a content list came back empty.
#[component]
pub fn EmptyState(
    #[prop(optional, into)] icon: Option<String>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon.map(|i| view! {
                <span class="empty-state-icon" aria-hidden="true">{i}</span>
            })}
            <p>{message}</p>
        </div>
    }
}
