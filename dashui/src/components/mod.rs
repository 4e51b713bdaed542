// Component library
// Bootstrap-styled controls built on the shared component base

pub mod alert;
pub mod banner;
pub mod base;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod modal;
pub mod radio;
pub mod select;
pub mod slider;
pub mod textarea;

pub use alert::*;
pub use banner::*;
pub use base::{Callback, Component, ComponentBase};
pub use button::*;
pub use checkbox::*;
pub use input::*;
pub use modal::*;
pub use radio::*;
pub use select::*;
pub use slider::*;
pub use textarea::*;
