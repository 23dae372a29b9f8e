use leptos::*;

use content::Cta;

use crate::components::link::{Link, LinkVariant};

#[component]
pub fn Navbar(#[prop(into)] brand: String, cta: Cta) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/" class="navbar-brand">{brand}</a>
                <div class="navbar-links">
                    <a href="#features">"Features"</a>
                    <a href="#faq">"FAQ"</a>
                    <Link variant=LinkVariant::Cta href=cta.href>{cta.label}</Link>
                </div>
            </div>
        </nav>
    }
}
