//! Pipeline section - the three-phase explainer

use super::{Icon, IconKind};
use crate::content::{PIPELINE_PHASES, PipelinePhase, Section};
use leptos::prelude::*;

/// Framed explainer under `#pipeline`; phases render in table order
#[component]
pub fn PipelineSection() -> impl IntoView {
    view! {
        <section id="pipeline" class="framed" data-section=Section::Pipeline.as_str()>
            <div class="glow-layer" style="background:radial-gradient(circle at 20% 20%, rgba(74,242,234,0.15), transparent 55%)"></div>
            <div class="glow-layer" style="background:radial-gradient(circle at 80% 10%, rgba(243,230,143,0.12), transparent 60%)"></div>
            <div class="framed-inner">
                <div class="section-head">
                    <div>
                        <p class="kicker kicker-yellow">
                            <Icon kind=IconKind::Workflow class="icon-sm" />
                            "Neural pipeline"
                        </p>
                        <h2 class="section-title">"Every frame is rewritten in the Prism core."</h2>
                    </div>
                    <p class="section-lede">
                        "Capture inputs, process through spectral transformers, and deliver adaptive stories all in a single orbit."
                    </p>
                </div>
                <div class="phase-grid">
                    {PIPELINE_PHASES.iter().copied().map(|phase| view! { <PhaseCard phase=phase /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One pipeline step
#[component]
pub fn PhaseCard(phase: PipelinePhase) -> impl IntoView {
    view! {
        <div class="phase-card">
            <span class="phase-id">{phase.id}</span>
            <div class="phase-head">
                <h4 class="phase-title">{phase.title}</h4>
                <div class="phase-orb" style=format!("background-image:{}", phase.accent)></div>
            </div>
            <p class="phase-summary">{phase.summary}</p>
            <p class="phase-details">{phase.details}</p>
            <div class="phase-rule" aria-hidden="true"></div>
        </div>
    }
}
