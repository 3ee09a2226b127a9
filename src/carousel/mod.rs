pub mod controller;
pub mod feed;
pub mod geometry;

pub use controller::{Carousel, Command, Signal};
pub use feed::LoopedFeed;
