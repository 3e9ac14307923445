use crate::transactions::TransactionStore;

#[cfg(not(feature = "web"))]
lazy_static::lazy_static! {
    static ref STORAGE_DIR: String = get_storage_dir();
}

const TRANSACTIONS_KEY: &str = "claim_transactions";

// Get the appropriate storage directory for the current platform
#[cfg(not(feature = "web"))]
fn get_storage_dir() -> String {
    #[cfg(target_os = "android")]
    {
        "/data/data/com.halfrekt.claim/files".to_string()
    }
    #[cfg(not(target_os = "android"))]
    {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        format!("{home_dir}/.halfrekt_claim")
    }
}

#[cfg(not(feature = "web"))]
fn get_transactions_file_path() -> String {
    format!("{}/transactions.json", *STORAGE_DIR)
}

#[cfg(not(feature = "web"))]
fn ensure_storage_dir() -> Result<(), std::io::Error> {
    match std::fs::create_dir_all(&*STORAGE_DIR) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("❌ Failed to create storage directory {}: {}", *STORAGE_DIR, e);
            Err(e)
        }
    }
}

pub fn save_transactions_to_storage(store: &TransactionStore) {
    let serialized = match serde_json::to_string(store) {
        Ok(s) => s,
        Err(e) => {
            log::error!("❌ Failed to serialize transactions: {}", e);
            return;
        }
    };

    #[cfg(feature = "web")]
    {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => {
                if let Err(e) = storage.set_item(TRANSACTIONS_KEY, &serialized) {
                    log::error!("❌ Failed to write transactions to web storage: {:?}", e);
                }
            }
            None => log::error!("❌ Web storage unavailable"),
        }
    }

    #[cfg(not(feature = "web"))]
    {
        if ensure_storage_dir().is_ok() {
            let file = get_transactions_file_path();
            match std::fs::write(&file, serialized) {
                Ok(_) => log::info!("✅ Transactions saved to: {}", file),
                Err(e) => log::error!("❌ Failed to write transactions to {}: {}", file, e),
            }
        }
    }
}

pub fn load_transactions_from_storage() -> TransactionStore {
    log::info!("🔄 Loading claim transactions from storage");

    #[cfg(feature = "web")]
    let data = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TRANSACTIONS_KEY).ok().flatten());

    #[cfg(not(feature = "web"))]
    let data = {
        let file = get_transactions_file_path();
        match std::fs::read_to_string(&file) {
            Ok(data) => Some(data),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::error!("❌ Failed to read transactions from {}: {}", file, e);
                }
                None
            }
        }
    };

    data.map(|d| parse_transactions(&d)).unwrap_or_default()
}

fn parse_transactions(data: &str) -> TransactionStore {
    match serde_json::from_str(data) {
        Ok(store) => store,
        Err(e) => {
            log::error!("❌ Failed to parse stored transactions ({}: {})", TRANSACTIONS_KEY, e);
            TransactionStore::default()
        }
    }
}
