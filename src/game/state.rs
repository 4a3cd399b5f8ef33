//! Game phase and decision types.

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No card drawn yet.
    NotStarted,
    /// A card is on screen awaiting a decision.
    CardShown,
    /// The "whose turn is it" interstitial is showing; waiting for the
    /// next player to acknowledge.
    AwaitingNextPlayer,
    /// The deck is exhausted; no further draws.
    Finished,
}

/// A player's decision on the shown card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Commit to the card's task; no drink penalty.
    Accept,
    /// Decline and drink instead; the card's penalty is applied.
    Reject,
}
