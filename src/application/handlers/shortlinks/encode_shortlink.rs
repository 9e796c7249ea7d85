//! EncodeShortLinkHandler - row id to shortlink.

use std::sync::Arc;

use super::ensure_staff;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::shortlink::ShortLink;
use crate::ports::UserReader;

#[derive(Debug, Clone)]
pub struct EncodeShortLinkQuery {
    pub requester: UserId,
    pub id: u64,
}

pub struct EncodeShortLinkHandler {
    users: Arc<dyn UserReader>,
}

impl EncodeShortLinkHandler {
    pub fn new(users: Arc<dyn UserReader>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: EncodeShortLinkQuery) -> Result<ShortLink, DomainError> {
        ensure_staff(self.users.as_ref(), &query.requester).await?;
        Ok(ShortLink::from_id(query.id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockUsers;
    use crate::domain::boosts::UserStanding;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::shortlink::MAX_ENCODABLE;

    fn handler(staff: i32) -> EncodeShortLinkHandler {
        EncodeShortLinkHandler::new(Arc::new(MockUsers::with_standing(
            UserId::new(1),
            UserStanding::new(staff, None),
        )))
    }

    fn query(id: u64) -> EncodeShortLinkQuery {
        EncodeShortLinkQuery {
            requester: UserId::new(1),
            id,
        }
    }

    #[tokio::test]
    async fn staff_can_encode() {
        let link = handler(1).handle(query(123_456)).await.unwrap();
        assert_eq!(link.as_str(), "fC6");
    }

    #[tokio::test]
    async fn non_staff_are_forbidden() {
        let err = handler(0).handle(query(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn unknown_requester_is_forbidden() {
        let handler = EncodeShortLinkHandler::new(Arc::new(MockUsers::default()));
        let err = handler.handle(query(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn oversized_id_reports_overflow() {
        let err = handler(1).handle(query(MAX_ENCODABLE + 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EncodingOverflow);
    }
}
