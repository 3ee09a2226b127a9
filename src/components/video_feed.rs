use crate::carousel::{Carousel, LoopedFeed};
use crate::components::ambient_glow::AmbientGlow;
use crate::components::feed_driver::FeedDriver;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoFeedProps {
    pub feed: LoopedFeed,
    pub dwell_ms: u32,
    pub top_overlay: AttrValue,
    pub side_overlay: AttrValue,
}

/// Hero section: the blurred ambient glow plus the phone card with the
/// snap-scrolling, endlessly looping feed.
#[function_component(VideoFeed)]
pub fn video_feed(props: &VideoFeedProps) -> Html {
    let container = use_node_ref();
    let ambient = use_node_ref();

    let driver = {
        let feed = props.feed.clone();
        let dwell_ms = props.dwell_ms;
        let container = container.clone();
        let ambient = ambient.clone();
        use_memo(
            move |_| {
                let slots = (0..feed.len()).map(|_| NodeRef::default()).collect();
                FeedDriver::new(Carousel::new(feed, dwell_ms), container, ambient, slots)
            },
            (),
        )
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                driver.mount();
                move || driver.teardown()
            },
            (),
        );
    }

    let onscroll = {
        let driver = driver.clone();
        Callback::from(move |_: Event| driver.report_scroll())
    };
    let ontouchstart = {
        let driver = driver.clone();
        Callback::from(move |_: TouchEvent| driver.gesture_started())
    };
    let ontouchend = {
        let driver = driver.clone();
        Callback::from(move |_: TouchEvent| driver.gesture_ended())
    };
    let ontouchcancel = {
        let driver = driver.clone();
        Callback::from(move |_: TouchEvent| driver.gesture_ended())
    };

    html! {
        <div class="hero">
            <AmbientGlow video_ref={ambient} />
            <div class="video-card video-card-shrink">
                <img
                    src={props.top_overlay.clone()}
                    class="feed-top-overlay"
                    alt="Top tab navigation"
                />
                <div
                    ref={container}
                    class="feed-scroller no-scrollbar"
                    {onscroll}
                    {ontouchstart}
                    {ontouchend}
                    {ontouchcancel}
                >
                    { for props.feed.slots().map(|(slot, src)| {
                        let oncanplay = {
                            let driver = driver.clone();
                            Callback::from(move |_: Event| driver.slot_ready(slot))
                        };
                        html! {
                            <div key={slot.to_string()} class="feed-slot">
                                <video
                                    ref={driver.slot_ref(slot)}
                                    src={src.to_string()}
                                    class="feed-video"
                                    loop=true
                                    muted=true
                                    playsinline=true
                                    preload="auto"
                                    {oncanplay}
                                />
                                <img
                                    src={props.side_overlay.clone()}
                                    class="feed-side-overlay"
                                    alt="Interaction buttons"
                                />
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
