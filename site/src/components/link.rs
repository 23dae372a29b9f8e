use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum LinkVariant {
    #[default]
    Plain,
    Cta,
    CtaOutline,
    Muted,
}

impl LinkVariant {
    fn class(self) -> &'static str {
        match self {
            LinkVariant::Plain => "link",
            LinkVariant::Cta => "btn btn-primary",
            LinkVariant::CtaOutline => "btn btn-outline",
            LinkVariant::Muted => "link link-muted",
        }
    }
}

/// Styled anchor. Call-to-action links on the landing page are anchors with
/// button styling, not `<button>` elements.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("{} {}", variant.class(), extra)
    } else {
        variant.class().to_string()
    };

    view! {
        <a href=href class=full_class>
            {children()}
        </a>
    }
}
