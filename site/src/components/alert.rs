use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertVariant {
    #[default]
    Info,
    Error,
}

impl AlertVariant {
    fn class(self) -> &'static str {
        match self {
            AlertVariant::Info => "alert",
            AlertVariant::Error => "alert alert-error",
        }
    }
}

/// Banner for messages the visitor has to see, e.g. a content document that
/// failed to load.
#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=variant.class() role="alert">
            {children()}
        </div>
    }
}
