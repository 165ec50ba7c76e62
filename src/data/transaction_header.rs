//! Transaction headers propagated between services.
//!
//! Each entry promotes a `header_key` metadata field: the canonical HTTP
//! header name carrying the value on the wire.

use crate::macros::define_catalog;

define_catalog! {
    /// Marker for the transaction-header catalog.
    marker: TransactionHeader,
    id: TransactionHeaderId,
    validated: ValidatedTransactionHeaderId,
    registry: TRANSACTION_HEADERS,
    name: "TransactionHeader",
    description: "Transaction headers propagated between services.",
    entries: [
        (TRANSACTION_ID, "transaction_id", "Unique id of the business transaction", "TransactionId", 0, [("header_key", "X-Elephant-TransactionId")]),
        (SESSION_ID, "session_id", "Customer session the request belongs to", "SessionId", 1, [("header_key", "X-Elephant-SessionId")]),
        (CORRELATION_ID, "correlation_id", "Correlates a request across service hops", "CorrelationId", 2, [("header_key", "X-Elephant-CorrelationId")]),
        (SOURCE_SYSTEM, "source_system", "System that originated the request", "SourceSystem", 3, [("header_key", "X-Elephant-SourceSystem")]),
        (ACCOUNT_DOMAIN, "account_domain", "Account domain the request acts within", "AccountDomain", 4, [("header_key", "X-Elephant-AccountDomain")]),
        (BRAND, "brand", "Brand the request acts on behalf of", "Brand", 5, [("header_key", "X-Elephant-Brand")]),
        (USER_ID, "user_id", "Authenticated user driving the request", "UserId", 6, [("header_key", "X-Elephant-UserId")]),
        (REQUEST_ORIGIN, "request_origin", "Channel the request entered the fleet through", "RequestOrigin", 7, [("header_key", "X-Elephant-RequestOrigin")]),
    ]
}

impl TransactionHeaderId {
    /// The canonical HTTP header name for this entry.
    pub fn header_key(&self) -> Option<&'static str> {
        self.entry().and_then(|entry| entry.meta_value("header_key"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_promotes_a_header_key() {
        for entry in TRANSACTION_HEADERS.entries() {
            let id = TransactionHeaderId::from_static(entry.id);
            let key = id.header_key().unwrap();
            assert!(key.starts_with("X-Elephant-"), "unexpected key {key}");
        }
    }

    #[test]
    fn header_key_is_absent_for_unresolvable_ids() {
        assert_eq!(TransactionHeaderId::new("cookie").header_key(), None);
    }
}
