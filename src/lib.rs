#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;
pub use ui::AppContext;

pub mod facet;
pub mod graphql;
