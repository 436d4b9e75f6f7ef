use std::collections::{BTreeSet, HashMap};

use super::store::{ComplianceStore, StoreError};

/// Reverse lookup from technical reports to the exposure group referencing
/// them. Three of the four extractors need this and all of them must handle
/// the no-match case identically: the link is simply absent, never an error.
pub struct ParentLinkResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: ComplianceStore + ?Sized> ParentLinkResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Map each report id to the first protocol evaluation referencing it.
    /// Issues one batched query for the whole id set; reports nothing
    /// references are absent from the map.
    pub async fn resolve_many(
        &self,
        report_ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, i64>, StoreError> {
        let unique: BTreeSet<i64> = report_ids.into_iter().collect();
        if unique.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<i64> = unique.into_iter().collect();
        let evaluations = self.store.protocols_by_technical_reports(&ids).await?;

        let mut links = HashMap::new();
        for evaluation in evaluations {
            if let Some(report_id) = evaluation.technical_report_id {
                links.entry(report_id).or_insert(evaluation.id);
            }
        }
        Ok(links)
    }
}
