use leptos::*;

use content::SiteContent;

use crate::components::alert::{Alert, AlertVariant};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::landing::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    match SiteContent::bundled() {
        Ok(site) => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&site.meta.title);
            }

            let brand = site.meta.name.clone();
            let nav_cta = site.hero.primary_cta.clone();
            let copyright = site.meta.copyright.clone();
            let contact_email = site.meta.contact_email.clone();

            view! {
                <Navbar brand=brand cta=nav_cta />
                <main>
                    <LandingPage content=site />
                </main>
                <Footer copyright=copyright contact_email=contact_email />
            }
            .into_view()
        }
        Err(err) => view! {
            <div class="container">
                <Alert variant=AlertVariant::Error>
                    {format!("Failed to load site content: {err}")}
                </Alert>
            </div>
        }
        .into_view(),
    }
}
