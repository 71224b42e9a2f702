pub mod api;
pub mod db;
pub mod fs;
pub mod presentation;
pub mod signature;

pub use api::HttpSignatureApi;
pub use db::repositories::DieselSignatureCacheRepository;
pub use fs::FileDomainTokenStore;
pub use presentation::HtmlDirectoryPresenter;
pub use signature::CidImageNormalizer;
