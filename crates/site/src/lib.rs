#[macro_use]
extern crate log;

pub mod dates;
pub mod detail;
pub mod dom;
pub mod forms;
pub mod pages;
pub mod render;

pub use detail::DetailView;
pub use dom::{Dom, PageDom};
pub use forms::{FormControls, FormHandler, FormState, MemoryForm};
pub use pages::PageController;
pub use render::Card;
