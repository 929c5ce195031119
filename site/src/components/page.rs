//! Page composer - fixed section order

use super::{
    GallerySection, HeroSection, PipelineSection, SecuritySection, SiteHeader, StackSection,
    WaitlistSection,
};
use leptos::prelude::*;

/// All sections of the landing page, in [`crate::Section::ORDER`].
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="page-main">
            <SiteHeader />
            <HeroSection />
            <StackSection />
            <PipelineSection />
            <GallerySection />
            <SecuritySection />
            <WaitlistSection />
        </main>
    }
}
