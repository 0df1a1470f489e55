use super::SortMemo;

use gridlink_core::model::FilterModel;

/// Paging and selection state of one grid.
#[derive(Debug)]
pub(super) struct Window {
    /// Row count of the unfiltered collection, as last observed
    pub(super) total: usize,

    pub(super) selected: Option<usize>,

    pub(super) scroll_index: usize,

    /// Filter model the search fork currently reflects
    pub(super) filter: Option<FilterModel>,

    pub(super) base_sort: SortMemo,

    pub(super) search_sort: SortMemo,
}

impl Window {
    pub(super) fn new() -> Window {
        Window {
            // The grid shows one loading row until the collection is read
            total: 1,
            selected: None,
            scroll_index: 0,
            filter: None,
            base_sort: SortMemo::default(),
            search_sort: SortMemo::default(),
        }
    }

    /// Forces the next filtered request to query again.
    pub(super) fn forget_filter(&mut self) {
        self.filter = None;
        self.search_sort.reset();
    }

    pub(super) fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        if let Some(index) = index {
            self.scroll_index = index;
        }
    }
}
