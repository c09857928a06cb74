use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::within_500_bytes;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubscriberPayload {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1), custom(function = within_500_bytes))]
    pub tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_payload() {
        let payload = CreateSubscriberPayload {
            user_id: 7,
            tag: "backend".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_tag_and_a_bad_user_id() {
        let empty_tag = CreateSubscriberPayload {
            user_id: 7,
            tag: String::new(),
        };
        assert!(empty_tag.validate().is_err());

        let bad_user = CreateSubscriberPayload {
            user_id: 0,
            tag: "backend".to_string(),
        };
        assert!(bad_user.validate().is_err());
    }

    #[test]
    fn bounds_the_tag_at_500_bytes() {
        let payload = CreateSubscriberPayload {
            user_id: 7,
            tag: "é".repeat(300),
        };
        assert!(payload.validate().is_err());
    }
}
