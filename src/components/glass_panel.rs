use crate::components::brand::{ArrowRight, NoteIcon};
use crate::glass::LiquidGlassParams;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Delay before the one-off repaint that makes the backdrop filter pick up
/// the video underneath.
const REPAINT_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct GlassPanelProps {
    pub params: LiquidGlassParams,
}

#[function_component(GlassPanel)]
pub fn glass_panel(props: &GlassPanelProps) -> Html {
    let repaint = use_state(|| 0u32);
    {
        let repaint = repaint.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(REPAINT_DELAY_MS, move || repaint.set(*repaint + 1));
                move || drop(timeout)
            },
            (),
        );
    }

    let panel_style = use_memo(|params| params.panel_style(), props.params.clone());
    let shadow_style = use_memo(|params| params.inner_shadow_style(), props.params.clone());

    html! {
        <div class="cta-dock slide-up-in" style="animation-delay: 1.6s;">
            <div class="glass-panel" style={(*panel_style).clone()} data-repaint={repaint.to_string()}>
                <div class="glass-layers">
                    <div class="glass-layer" />
                    <div class="glass-layer" style={(*shadow_style).clone()} />
                </div>
                <div class="app-row">
                    <div class="app-icon"><NoteIcon /></div>
                    <div class="app-meta">
                        <h3>{"TikTok: Videos, Lives & Musics"}</h3>
                        <p>{"Global video community"}</p>
                    </div>
                </div>
                <button class="cta-button">
                    <span>{"Download TikTok App"}</span>
                    <span class="cta-arrow"><ArrowRight /></span>
                </button>
            </div>
        </div>
    }
}
