use folio_core::{Faceted, FacetedListView};
use tracing::debug;

use crate::cli::ListArgs;

/// Replay the command-line facet toggles and page choice onto a list view
///
/// Toggles run first, each one sending the list back to page one, then the
/// requested page is applied.
pub fn apply_list_args<T: Faceted>(view: &mut FacetedListView<T>, args: &ListArgs) {
    for group in &args.groups {
        let active = view.toggle_group(group.trim());
        if !active {
            debug!(group = %group, "group named twice, switched back off");
        }
    }

    for tag in &args.tags {
        let active = view.toggle_tag(tag.trim());
        if !active {
            debug!(tag = %tag, "tag named twice, switched back off");
        }
    }

    view.on_page_change(args.page);
}
