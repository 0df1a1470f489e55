use super::Grid;

use gridlink_core::{
    model::{FilterModel, SortModel},
    schema::Row,
    source::QueryScope,
    Collection, Error, Record, Result,
};
use gridlink_query::Serializer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A page request raised by the grid's infinite row model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub start_row: usize,

    #[serde(default)]
    pub filter_model: FilterModel,

    #[serde(default)]
    pub sort_model: SortModel,
}

impl PageRequest {
    pub fn new(start_row: usize) -> PageRequest {
        PageRequest {
            start_row,
            ..PageRequest::default()
        }
    }

    pub fn filter(mut self, filter_model: FilterModel) -> Self {
        self.filter_model = filter_model;
        self
    }

    pub fn sort(mut self, sort_model: SortModel) -> Self {
        self.sort_model = sort_model;
        self
    }
}

/// Rows of one page and the row count to report alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub rows: Vec<Row>,
    pub total: usize,
}

impl Grid {
    /// Serves one page request.
    ///
    /// With an active filter the rows come from the search fork and the
    /// total is the fork's length; otherwise from the datasource with the
    /// last observed total.
    pub async fn request_page(&mut self, request: &PageRequest) -> Result<Page> {
        let schema = self.schema.clone();
        let serializer = Serializer::new(&schema);
        let start = request.start_row;

        let predicate = if request.filter_model.is_empty() {
            String::new()
        } else {
            serializer.filter(&request.filter_model)
        };

        let (records, total) = if predicate.is_empty() {
            self.window
                .base_sort
                .apply(&request.sort_model, &serializer, &*self.datasource)
                .await?;

            let records = self.fetch(&*self.datasource, start).await?;
            (records, self.window.total)
        } else {
            let search = self.search(&request.filter_model, &predicate).await?;

            self.window
                .search_sort
                .apply(&request.sort_model, &serializer, &*search)
                .await?;

            let records = self.fetch(&*search, start).await?;
            (records, search.len())
        };

        let rows: Vec<Row> = records
            .iter()
            .map(|record| schema.projection().project(record))
            .collect();

        tracing::debug!(
            widget_id = %self.widget_id,
            start,
            filtered = !predicate.is_empty(),
            rows = rows.len(),
            total,
            "page"
        );

        Ok(Page { rows, total })
    }

    /// Serves a page request through the grid's callback protocol: exactly
    /// one of `success` and `fail` is invoked.
    pub async fn get_rows<S, F>(&mut self, request: &PageRequest, success: S, fail: F)
    where
        S: FnOnce(Vec<Row>, usize),
        F: FnOnce(),
    {
        match self.request_page(request).await {
            Ok(page) => success(page.rows, page.total),
            Err(err) => {
                tracing::warn!(
                    widget_id = %self.widget_id,
                    start = request.start_row,
                    error = %err,
                    "page request failed"
                );
                fail()
            }
        }
    }

    async fn fetch(&self, collection: &dyn Collection, start: usize) -> Result<Vec<Record>> {
        collection
            .fetch_window(start, self.settings.page_size)
            .await
            .map_err(|err| err.context(Error::fetch_failed(start)))
    }

    /// Returns the search fork holding the matches of `model`, querying it
    /// when the model changed since the last request.
    async fn search(
        &mut self,
        model: &FilterModel,
        predicate: &str,
    ) -> Result<Arc<dyn Collection>> {
        let search = match &self.search {
            Some(search) => search.clone(),
            None => {
                let search = self.datasource.fork();
                self.search = Some(search.clone());
                self.window.forget_filter();
                search
            }
        };

        if self.window.filter.as_ref() != Some(model) {
            let scope = QueryScope::of(&*self.datasource);
            search.query(predicate, &scope).await?;

            tracing::debug!(
                collection = search.id(),
                predicate,
                matched = search.len(),
                "filtered"
            );

            self.window.filter = Some(model.clone());
            self.window.search_sort.reset();
        }

        Ok(search)
    }
}
