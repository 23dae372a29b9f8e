use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum HeaderLevel {
    #[default]
    H2,
    H3,
}

/// Heading block for a landing page section: optional eyebrow line above the
/// title, optional intro paragraph below it.
#[component]
pub fn SectionHeader(
    eyebrow: Option<String>,
    #[prop(into)] title: String,
    intro: Option<String>,
    #[prop(optional)] level: HeaderLevel,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("section-header {}", extra)
    } else {
        "section-header".to_string()
    };

    let heading = match level {
        HeaderLevel::H2 => view! { <h2 class="section-title">{title}</h2> }.into_view(),
        HeaderLevel::H3 => view! { <h3 class="section-title">{title}</h3> }.into_view(),
    };

    view! {
        <div class=full_class>
            {eyebrow.map(|e| view! {
                <span class="section-eyebrow">{e}</span>
            })}
            {heading}
            {intro.map(|i| view! {
                <p class="section-intro">{i}</p>
            })}
        </div>
    }
}
