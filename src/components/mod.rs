pub mod ambient_glow;
pub mod brand;
pub mod feed_driver;
pub mod glass_panel;
pub mod video_feed;
