mod controller;
mod state;
mod view;

pub use controller::Carousel;
pub use state::CarouselState;
pub use view::{derive_view_model, ControlState, ViewModel};
