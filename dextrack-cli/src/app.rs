//! Per-invocation application handle: storage, catalog client, collection.

use std::future::Future;
use std::sync::Arc;

use dextrack_api::{CatalogClient, HttpFetcher};
use dextrack_core::{EntryRef, JsonFileStore};
use dextrack_lib::{CollectionStore, Settings};

use crate::error::CliError;
use crate::spinner;

pub(crate) type Store = Arc<JsonFileStore>;

/// Everything a command needs. Built once in `main` and passed down; owns
/// the tokio runtime every command's async work runs on.
pub(crate) struct App {
    pub store: Store,
    pub client: CatalogClient<HttpFetcher, Store>,
    pub collection: CollectionStore<Store>,
    pub quiet: bool,
    rt: tokio::runtime::Runtime,
}

impl App {
    pub(crate) fn open(settings: Settings, quiet: bool) -> Result<Self, CliError> {
        let data_dir = settings.data_dir();
        log::debug!("Data directory: {}", data_dir.display());

        let store = Arc::new(JsonFileStore::new(data_dir));
        let client = CatalogClient::with_http(&settings.api, store.clone())?;
        let collection = CollectionStore::new(store.clone());
        let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;
        Ok(Self {
            store,
            client,
            collection,
            quiet,
            rt,
        })
    }

    /// Run `fut` to completion with a spinner showing `msg`.
    pub(crate) fn block_on<F: Future>(&self, msg: &str, fut: F) -> F::Output {
        let pb = spinner::start(msg, self.quiet);
        let output = self.rt.block_on(fut);
        pb.finish_and_clear();
        output
    }

    /// Resolve a user-supplied reference to a dex number, fetching the entry
    /// when a name was given.
    pub(crate) fn resolve_id(&self, input: &str) -> Result<u32, CliError> {
        match EntryRef::from(input) {
            EntryRef::Id(id) => Ok(id),
            name @ EntryRef::Name(_) => {
                let msg = format!("Looking up {name}...");
                let entry = self.block_on(&msg, self.client.get_entry(name.clone()))?;
                Ok(entry.id)
            }
        }
    }
}
