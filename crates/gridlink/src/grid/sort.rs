use gridlink_core::{model::SortModel, Collection, Result};
use gridlink_query::Serializer;

/// Remembers the sort model last applied to a collection so unchanged
/// models are not re-issued.
#[derive(Debug, Default)]
pub(super) struct SortMemo {
    applied: SortModel,
}

impl SortMemo {
    /// Orders `collection` by `model` unless it is empty or already
    /// applied. Returns whether the model was applied.
    pub(super) async fn apply(
        &mut self,
        model: &SortModel,
        serializer: &Serializer<'_>,
        collection: &dyn Collection,
    ) -> Result<bool> {
        if model.is_empty() || *model == self.applied {
            return Ok(false);
        }

        match serializer.order_by(model) {
            Some(expr) => {
                collection.order_by(&expr).await?;
                tracing::debug!(collection = collection.id(), order_by = %expr, "sorted");
            }
            None => {
                tracing::debug!(collection = collection.id(), "no sorted column is bound");
            }
        }

        self.applied = model.clone();
        Ok(true)
    }

    pub(super) fn reset(&mut self) {
        self.applied = SortModel::default();
    }
}
