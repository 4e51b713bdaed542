// Design tokens
// Bootstrap 5 class names and the small enums that select between them

pub mod category;
pub mod classes;
pub mod width;

pub use category::*;
pub use width::*;
