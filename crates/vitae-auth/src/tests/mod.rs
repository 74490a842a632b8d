mod change_password;

use crate::{AccountSettings, AccountStore, IdentityTable};

use std::sync::Arc;

use vitae_storage::keys::USERS_KEY;
use vitae_storage::{KeyValueStore, MemoryKeyValueStore, read_json};

pub(crate) const EMAIL: &str = "ana@example.com";
pub(crate) const PASSWORD: &str = "s3cret";
pub(crate) const NAME: &str = "Ana";

/// Account store over a fresh in-memory backend with default settings
pub(crate) fn new_store() -> (AccountStore, Arc<MemoryKeyValueStore>) {
    new_store_with(AccountSettings::default())
}

pub(crate) fn new_store_with(settings: AccountSettings) -> (AccountStore, Arc<MemoryKeyValueStore>) {
    let backend = Arc::new(MemoryKeyValueStore::new());
    (reopen(&backend, settings), backend)
}

/// A second store over the same backend, as after an app restart
pub(crate) fn reopen(backend: &Arc<MemoryKeyValueStore>, settings: AccountSettings) -> AccountStore {
    let storage: Arc<dyn KeyValueStore> = backend.clone();
    AccountStore::new(storage, settings)
}

pub(crate) async fn identity_table(backend: &MemoryKeyValueStore) -> IdentityTable {
    read_json::<IdentityTable>(backend, USERS_KEY)
        .await
        .unwrap()
        .unwrap_or_default()
}
