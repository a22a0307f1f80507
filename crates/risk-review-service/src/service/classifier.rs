//! 收入来源分类器

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{RevenueEvidence, RevenueSource};
use crate::repository::RevenueSourceRepositoryTrait;

/// 按用户的未结算余额判断收入来源
#[derive(Clone)]
pub struct RevenueSourceClassifier {
    repo: Arc<dyn RevenueSourceRepositoryTrait>,
}

impl RevenueSourceClassifier {
    pub fn new(repo: Arc<dyn RevenueSourceRepositoryTrait>) -> Self {
        Self { repo }
    }

    /// 收集证据后给出标签，顺序固定为 sales, collaborator, affiliate, credit
    #[instrument(skip(self))]
    pub async fn classify(&self, user_id: i64) -> Result<Vec<RevenueSource>> {
        let evidence = RevenueEvidence {
            has_sales: self.repo.has_unpaid_sales(user_id).await?,
            affiliate_kinds: self.repo.unpaid_affiliate_kinds(user_id).await?,
            has_credits: self.repo.has_unpaid_credits(user_id).await?,
        };

        let sources = RevenueSource::classify(&evidence);
        debug!(user_id, ?sources, "revenue sources classified");
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReviewError;
    use crate::models::AffiliateKind;
    use crate::repository::MockRevenueSourceRepositoryTrait;

    fn classifier_with(
        sales: bool,
        kinds: Vec<AffiliateKind>,
        credits: bool,
    ) -> RevenueSourceClassifier {
        let mut repo = MockRevenueSourceRepositoryTrait::new();
        repo.expect_has_unpaid_sales()
            .withf(|id| *id == 7)
            .returning(move |_| Ok(sales));
        repo.expect_unpaid_affiliate_kinds()
            .returning(move |_| Ok(kinds.clone()));
        repo.expect_has_unpaid_credits()
            .returning(move |_| Ok(credits));
        RevenueSourceClassifier::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_sales_and_affiliate() {
        let classifier = classifier_with(true, vec![AffiliateKind::DirectAffiliate], false);
        let sources = classifier.classify(7).await.unwrap();
        assert_eq!(sources, vec![RevenueSource::Sales, RevenueSource::Affiliate]);
    }

    #[tokio::test]
    async fn test_collaborator_is_not_affiliate() {
        let classifier = classifier_with(false, vec![AffiliateKind::Collaborator], false);
        let sources = classifier.classify(7).await.unwrap();
        assert_eq!(sources, vec![RevenueSource::Collaborator]);
    }

    #[tokio::test]
    async fn test_all_sources_in_presentation_order() {
        let classifier = classifier_with(
            true,
            vec![AffiliateKind::GlobalAffiliate, AffiliateKind::Collaborator],
            true,
        );
        let sources = classifier.classify(7).await.unwrap();
        assert_eq!(
            sources,
            vec![
                RevenueSource::Sales,
                RevenueSource::Collaborator,
                RevenueSource::Affiliate,
                RevenueSource::Credit,
            ]
        );
    }

    #[tokio::test]
    async fn test_no_evidence_yields_empty() {
        let classifier = classifier_with(false, vec![], false);
        assert!(classifier.classify(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockRevenueSourceRepositoryTrait::new();
        repo.expect_has_unpaid_sales()
            .returning(|_| Err(ReviewError::Internal("boom".to_string())));
        let classifier = RevenueSourceClassifier::new(Arc::new(repo));

        let err = classifier.classify(1).await.unwrap_err();
        assert!(matches!(err, ReviewError::Internal(_)));
    }
}
