use leptos::*;

/// Card container with an optional glyph and heading, used for the feature
/// grid.
#[component]
pub fn Card(
    icon: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("card {}", extra)
    } else {
        "card".to_string()
    };

    view! {
        <div class=full_class>
            {icon.map(|i| view! {
                <span class="card-icon" aria-hidden="true">{i}</span>
            })}
            {title.map(|t| view! {
                <h3 class="card-title">{t}</h3>
            })}
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}
