pub mod account_settings;
pub mod account_store;
pub mod error;

pub use account_settings::{AccountSettings, BootstrapCredential};
pub use account_store::{AccountStore, IdentityTable};
pub use error::{AuthError, Result};

#[cfg(test)]
mod tests;
