// handlers/protected - endpoints behind require_auth; each receives the
// caller's AuthContext as an extension.
pub mod breweries;
