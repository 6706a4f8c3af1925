// Two handler tiers: public (no auth, token acquisition) and protected
// (bearer token required, everything under /api/*).
pub mod protected;
pub mod public;
