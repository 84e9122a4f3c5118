use glide_animation::{CompletionSource, SettleTicket};

/// A widget whose settle animations finish through [`SettleTicket`]s.
///
/// Hosts keep one of these per widget and route both completion signals
/// (transition end and fallback timer) to [`complete_settle`](Self::complete_settle).
pub trait SettleTarget {
    fn pending_settle(&self) -> Option<SettleTicket>;

    /// Returns `true` only for the call that actually finished the settle.
    fn complete_settle(&mut self, ticket: SettleTicket, source: CompletionSource) -> bool;
}
