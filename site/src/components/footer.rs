use leptos::*;

use crate::components::link::{Link, LinkVariant};

#[component]
pub fn Footer(
    #[prop(into)] copyright: String,
    #[prop(into)] contact_email: String,
) -> impl IntoView {
    let mailto = format!("mailto:{}", contact_email);

    view! {
        <footer class="footer">
            <div class="container footer-content">
                <span class="footer-copyright">{copyright}</span>
                <div class="footer-links">
                    <a href="#faq">"FAQ"</a>
                    <Link variant=LinkVariant::Muted href=mailto>{contact_email}</Link>
                </div>
            </div>
        </footer>
    }
}
