use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AmbientGlowProps {
    pub video_ref: NodeRef,
}

/// Blurred, muted copy of the active video behind the card. Its source is set
/// by the feed driver, never by props.
#[function_component(AmbientGlow)]
pub fn ambient_glow(props: &AmbientGlowProps) -> Html {
    html! {
        <div class="ambient video-card-ambient">
            <div class="ambient-frame">
                <video
                    ref={props.video_ref.clone()}
                    class="ambient-video"
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    preload="auto"
                />
            </div>
        </div>
    }
}
