mod token_slot_store;

pub use token_slot_store::{FileDomainTokenStore, DEFAULT_TOKEN_FILE};
