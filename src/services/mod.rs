pub mod identity;

pub use identity::{ClerkClient, IdentityError, IdentityProvider, IdentityUser};
