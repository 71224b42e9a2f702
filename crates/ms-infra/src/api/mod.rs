mod http_signature_api;

pub use http_signature_api::HttpSignatureApi;
