pub mod formatting;

pub use formatting::{render_facets, render_list, render_profile, ItemDetails};
