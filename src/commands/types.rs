//! Types command - list the type filter values

use crate::{
    query::MediaTypeFilter,
    view::{render::render_filter_options, type_filter_options},
};

/// Execute the types command
pub fn execute(quiet: bool) {
    if !quiet {
        println!("Type filters:");
    }
    print!("{}", render(MediaTypeFilter::All));
}

/// Render the filter options with `active` marked
#[must_use]
pub fn render(active: MediaTypeFilter) -> String {
    render_filter_options(&type_filter_options(active))
}
