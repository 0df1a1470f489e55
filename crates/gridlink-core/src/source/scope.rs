/// Restricts a query to the entities of an existing selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryScope {
    /// Server reference of the selection to search within
    pub dataset: Option<String>,

    /// Attributes the query may touch
    pub filter_attributes: Option<String>,
}

impl QueryScope {
    /// Scope matching the current selection of `collection`.
    pub fn of(collection: &dyn super::Collection) -> QueryScope {
        QueryScope {
            dataset: collection.dataset(),
            filter_attributes: collection.filter_attributes(),
        }
    }
}
