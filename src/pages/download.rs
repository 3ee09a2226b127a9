use crate::carousel::LoopedFeed;
use crate::components::brand::Wordmark;
use crate::components::glass_panel::GlassPanel;
use crate::components::video_feed::VideoFeed;
use crate::config;
use yew::prelude::*;

#[function_component(DownloadPage)]
pub fn download_page() -> Html {
    let config = config::get();
    let feed = match LoopedFeed::new(config.videos.clone()) {
        Ok(feed) => Some(feed),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    };

    html! {
        <div class="download-page">
            <style>{PAGE_CSS}</style>
            <header class="brand-bar slide-up-in" style="animation-delay: 2.1s;">
                <Wordmark />
            </header>
            <div class="headline slide-up-in" style="animation-delay: 1.9s;">
                <h1>{"Download TikTok"}<br/>{"Make your day"}</h1>
            </div>
            {
                if let Some(feed) = feed {
                    html! {
                        <VideoFeed
                            feed={feed}
                            dwell_ms={config.dwell_ms}
                            top_overlay={AttrValue::from(config.top_overlay.clone())}
                            side_overlay={AttrValue::from(config.side_overlay.clone())}
                        />
                    }
                } else {
                    html! { <div class="hero" /> }
                }
            }
            <GlassPanel params={config.glass.clone()} />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .download-page {
        position: relative;
        display: flex;
        flex-direction: column;
        width: 100%;
        height: 100%;
        overflow: hidden;
        background: #000;
        color: #fff;
        font-family: "Inter", "TikTok Sans", sans-serif;
        user-select: none;
        -webkit-user-select: none;
    }
    .brand-bar {
        position: absolute;
        top: 0;
        left: 0;
        z-index: 30;
        padding: 16px 0 0 16px;
    }
    .wordmark {
        display: flex;
        align-items: center;
        gap: 4px;
        height: 31px;
    }
    .wordmark-icon {
        width: 26px;
        height: 26px;
    }
    .wordmark-text {
        font-size: 22px;
        font-weight: 700;
        letter-spacing: -0.02em;
        color: #fafafa;
    }
    .note-offset {
        mix-blend-mode: screen;
        transform: translate(1.5px, 1.5px);
    }
    .headline {
        position: relative;
        z-index: 20;
        flex-shrink: 0;
        margin-top: 64px;
        padding-left: 16px;
    }
    .headline h1 {
        margin: 0;
        font-size: 40px;
        font-weight: 600;
        line-height: 1.2;
        letter-spacing: -0.025em;
        color: #f6f6f6;
    }
    .hero {
        position: relative;
        flex: 1;
        min-height: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding-bottom: 32px;
    }
    .ambient {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        pointer-events: none;
        opacity: 0;
    }
    .ambient-frame {
        position: relative;
        width: 80%;
        aspect-ratio: 49 / 106;
        transform: scale(1.25);
    }
    .ambient-video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: blur(60px) saturate(1.5);
        opacity: 0.5;
        mask-image: radial-gradient(circle at center, black 40%, transparent 80%);
        -webkit-mask-image: radial-gradient(circle at center, black 40%, transparent 80%);
    }
    .video-card {
        position: relative;
        z-index: 10;
        flex-shrink: 0;
        width: 80%;
        aspect-ratio: 49 / 106;
        overflow: hidden;
        background: #18181b;
        transform-origin: center top;
    }
    .feed-top-overlay {
        position: absolute;
        top: 22px;
        left: 0;
        z-index: 40;
        width: 100%;
        aspect-ratio: 195 / 22;
        pointer-events: none;
    }
    .feed-scroller {
        width: 100%;
        height: 100%;
        overflow-y: scroll;
        scroll-snap-type: y mandatory;
        scrollbar-width: none;
        -ms-overflow-style: none;
    }
    .no-scrollbar::-webkit-scrollbar {
        display: none;
    }
    .feed-slot {
        position: relative;
        width: 100%;
        height: 100%;
        flex-shrink: 0;
        scroll-snap-align: start;
    }
    .feed-video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: brightness(0.85);
    }
    .feed-side-overlay {
        position: absolute;
        right: 0;
        bottom: 96px;
        z-index: 40;
        width: 15%;
        aspect-ratio: 5 / 32;
        pointer-events: none;
    }
    .cta-dock {
        position: absolute;
        left: 16px;
        right: 16px;
        bottom: 8px;
        z-index: 60;
        pointer-events: none;
    }
    .glass-panel {
        position: relative;
        overflow: hidden;
        padding: 18px;
        border-radius: 32px;
        pointer-events: auto;
    }
    .glass-layers {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .glass-layer {
        position: absolute;
        inset: 0;
        border-radius: 32px;
    }
    .app-row {
        position: relative;
        z-index: 10;
        display: flex;
        align-items: center;
        gap: 16px;
        margin-bottom: 16px;
    }
    .app-icon {
        flex-shrink: 0;
        width: 64px;
        height: 64px;
        box-sizing: border-box;
        padding: 12px;
        overflow: hidden;
        border-radius: 16px;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: #000;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
    }
    .app-meta {
        overflow: hidden;
    }
    .app-meta h3 {
        margin: 0;
        font-size: 18px;
        font-weight: 700;
        line-height: 1.25;
        letter-spacing: -0.025em;
    }
    .app-meta p {
        margin: 4px 0 0;
        font-size: 13px;
        font-weight: 500;
        color: rgba(255, 255, 255, 0.6);
    }
    .cta-button {
        position: relative;
        z-index: 10;
        width: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 8px;
        padding: 16px 0;
        border: none;
        border-radius: 9999px;
        background: #fe2c55;
        color: #fff;
        font-size: 18px;
        font-weight: 700;
        box-shadow: 0 10px 15px -3px rgba(254, 44, 85, 0.3);
        transition: all 0.15s ease;
        cursor: pointer;
    }
    .cta-button:hover {
        filter: brightness(1.1);
    }
    .cta-button:active {
        transform: scale(0.98);
    }
    .cta-arrow {
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 4px;
        border-radius: 9999px;
        background: #fff;
        color: #fe2c55;
        transition: transform 0.15s ease;
    }
    .cta-button:hover .cta-arrow {
        transform: translateX(4px);
    }
    .slide-up-in {
        opacity: 0;
        transform: translateY(24px);
        animation: slideUpIn 0.6s ease-in-out forwards;
    }
    @keyframes slideUpIn {
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
    .video-card-shrink {
        transform: translateY(-160px) scale(1.25);
        border-radius: 0;
        box-shadow: none;
        animation: videoCardShrink 0.6s ease-in-out 1s forwards;
    }
    @keyframes videoCardShrink {
        from {
            transform: translateY(-160px) scale(1.25);
            border-radius: 0;
            box-shadow: none;
        }
        to {
            transform: translateY(40px) scale(1);
            border-radius: 36px;
            box-shadow: 0 40px 100px rgba(0, 0, 0, 0.95);
        }
    }
    .video-card-ambient {
        animation: ambientFadeIn 1s ease-in-out 1s forwards;
    }
    @keyframes ambientFadeIn {
        to {
            opacity: 1;
        }
    }
"#;
