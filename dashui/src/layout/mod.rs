// Layout
// Containers, grid rows and the singleton page

mod container;
mod page;
mod row;

pub use container::{container, Container, ContainerBuilder, ContainerRole};
pub use page::{page, PageBuilder};
pub use row::{row, Layout};
