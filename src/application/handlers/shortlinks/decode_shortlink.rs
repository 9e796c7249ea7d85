//! DecodeShortLinkHandler - shortlink to row id.

use std::sync::Arc;

use super::ensure_staff;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::shortlink::ShortLink;
use crate::ports::UserReader;

#[derive(Debug, Clone)]
pub struct DecodeShortLinkQuery {
    pub requester: UserId,
    pub shortlink: String,
}

pub struct DecodeShortLinkHandler {
    users: Arc<dyn UserReader>,
}

impl DecodeShortLinkHandler {
    pub fn new(users: Arc<dyn UserReader>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: DecodeShortLinkQuery) -> Result<u64, DomainError> {
        ensure_staff(self.users.as_ref(), &query.requester).await?;
        let link: ShortLink = query.shortlink.parse()?;
        Ok(link.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockUsers;
    use crate::domain::boosts::UserStanding;
    use crate::domain::foundation::ErrorCode;

    fn handler() -> DecodeShortLinkHandler {
        DecodeShortLinkHandler::new(Arc::new(MockUsers::with_standing(
            UserId::new(1),
            UserStanding::new(2, None),
        )))
    }

    fn query(shortlink: &str) -> DecodeShortLinkQuery {
        DecodeShortLinkQuery {
            requester: UserId::new(1),
            shortlink: shortlink.to_string(),
        }
    }

    #[tokio::test]
    async fn staff_can_decode() {
        assert_eq!(handler().handle(query("QtGg")).await.unwrap(), 5_587_680);
    }

    #[tokio::test]
    async fn invalid_symbol_is_reported() {
        let err = handler().handle(query("Qt!g")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSymbol);
    }

    #[tokio::test]
    async fn reader_failure_propagates() {
        let handler = DecodeShortLinkHandler::new(Arc::new(MockUsers::failing()));
        let err = handler.handle(query("J")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
