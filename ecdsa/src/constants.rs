//! Constants used by the ECDSA engine.

/// Retry cap for key generation.
///
/// A candidate key is rejected when its public point fails the acceptance
/// checks; on a correctly configured prime-order curve the first draw is
/// accepted essentially always, so exhausting this cap signals a
/// configuration or random-source fault.
pub const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// Retry cap for signing.
///
/// A signing attempt is discarded when the ephemeral scalar reduces to a
/// zero `r` or `s`; both events have probability on the order of one over
/// the group order per draw.
pub const MAX_SIGN_ATTEMPTS: usize = 64;
