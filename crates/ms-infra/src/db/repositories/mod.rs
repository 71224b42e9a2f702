mod signature_repo;

pub use signature_repo::*;
