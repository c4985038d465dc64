use serde::{Deserialize, Serialize};

/// Reply payload produced by the assistant capability.
///
/// The shape mirrors what a real answer service would return; the stub
/// frontend client fills it with canned content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// The answer text shown to the user.
    pub answer: String,
    /// Names of the sources the answer was drawn from.
    pub sources: Vec<String>,
    /// Confidence in the answer, `0.0..=1.0`.
    pub confidence: f32,
    /// Suggested follow-up prompts.
    pub follow_up: Vec<String>,
}

/// One question/answer exchange kept in the session history.
///
/// Entries are immutable once appended; the history is append-only and
/// ordered by insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantExchange {
    /// The question as the user typed it.
    pub query: String,
    /// The reply the assistant produced.
    pub response: AssistantReply,
    /// Epoch milliseconds, assigned by the store when the entry is appended.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_round_trips_through_serde() {
        let exchange = AssistantExchange {
            query: "Where is city hall?".to_string(),
            response: AssistantReply {
                answer: "On Main Street.".to_string(),
                sources: vec!["City Database".to_string()],
                confidence: 0.85,
                follow_up: vec!["What are the hours?".to_string()],
            },
            timestamp: 1_700_000_000_000,
        };

        let json = serde_json::to_string(&exchange).unwrap();
        let back: AssistantExchange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exchange);
    }
}
