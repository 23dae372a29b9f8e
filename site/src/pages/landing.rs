use leptos::*;

use content::{Closing, FaqSection, FeatureSection, Hero, SiteContent};

use crate::components::accordion::Accordion;
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::link::{Link, LinkVariant};
use crate::components::section_header::SectionHeader;

#[component]
pub fn LandingPage(content: SiteContent) -> impl IntoView {
    view! {
        <HeroSection hero=content.hero />
        <FeatureGrid section=content.features />
        <FaqBlock section=content.faq />
        <ClosingSection closing=content.closing />
    }
}

#[component]
fn HeroSection(hero: Hero) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container container-narrow">
                <h1 class="hero-heading">{hero.heading}</h1>
                <p class="hero-lede">{hero.lede}</p>
                <div class="hero-actions">
                    <Link variant=LinkVariant::Cta href=hero.primary_cta.href>
                        {hero.primary_cta.label}
                    </Link>
                    {hero.secondary_cta.map(|cta| view! {
                        <Link variant=LinkVariant::CtaOutline href=cta.href>{cta.label}</Link>
                    })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGrid(section: FeatureSection) -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <SectionHeader
                    eyebrow=section.eyebrow
                    title=section.heading
                    intro=section.intro
                />
                <div class="feature-grid">
                    {section.items.into_iter().map(|feature| view! {
                        <Card icon=feature.icon title=feature.title>
                            <p>{feature.body}</p>
                        </Card>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqBlock(section: FaqSection) -> impl IntoView {
    view! {
        <section id="faq" class="section">
            <div class="container container-narrow">
                <SectionHeader
                    eyebrow=section.eyebrow
                    title=section.heading
                    intro=section.intro
                />
                {if section.items.is_empty() {
                    view! {
                        <EmptyState message="No questions yet. Ask us anything instead." />
                    }.into_view()
                } else {
                    view! {
                        <Accordion
                            items=section.items
                            default_open_id=section.default_open_id
                        />
                    }.into_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn ClosingSection(closing: Closing) -> impl IntoView {
    view! {
        <section class="section closing">
            <div class="container container-narrow">
                <h2 class="closing-heading">{closing.heading}</h2>
                <p class="closing-body">{closing.body}</p>
                <Link variant=LinkVariant::Cta href=closing.cta.href>{closing.cta.label}</Link>
            </div>
        </section>
    }
}
