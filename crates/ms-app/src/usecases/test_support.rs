//! Hand-written port fakes shared by the use case tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use ms_core::ports::{
    DomainTokenStorePort, SignatureApiError, SignatureApiPort, SignatureCacheError,
    SignatureCachePort, SignatureNormalizerPort, SignaturePresenterPort, TokenStoreError,
};
use ms_core::{DomainToken, FetchStatus, HostDiagnostics, RawSignature, Signature};

pub fn diagnostics() -> HostDiagnostics {
    HostDiagnostics {
        email_address: "jane@example.test".to_string(),
        host_name: "Outlook".to_string(),
        host_version: "16.0".to_string(),
        manifest_version: "1.0.0.0".to_string(),
    }
}

pub fn raw_signature(name: &str, html: Option<&str>) -> RawSignature {
    RawSignature {
        name: name.to_string(),
        html: html.map(str::to_string),
        images: Vec::new(),
    }
}

#[derive(Default)]
pub struct InMemorySignatureCache {
    rows: Mutex<Vec<Signature>>,
    replace_calls: AtomicUsize,
    clear_calls: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemorySignatureCache {
    pub fn with(rows: Vec<Signature>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn snapshot(&self) -> Vec<Signature> {
        self.rows.lock().unwrap().clone()
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SignatureCachePort for InMemorySignatureCache {
    async fn replace_all(&self, signatures: &[Signature]) -> Result<(), SignatureCacheError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SignatureCacheError::Storage("disk full".into()));
        }
        *self.rows.lock().unwrap() = signatures.to_vec();
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Signature>, SignatureCacheError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SignatureCacheError::Storage("database is locked".into()));
        }
        Ok(self.snapshot())
    }

    async fn clear(&self) -> Result<(), SignatureCacheError> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SignatureCacheError::Storage("disk full".into()));
        }
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

pub struct InMemoryTokenStore {
    token: Mutex<Option<DomainToken>>,
    fail_io: AtomicBool,
}

impl InMemoryTokenStore {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: Mutex::new(token.map(DomainToken::from)),
            fail_io: AtomicBool::new(false),
        }
    }

    pub fn current(&self) -> Option<DomainToken> {
        self.token.lock().unwrap().clone()
    }

    pub fn fail_io(&self, fail: bool) {
        self.fail_io.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DomainTokenStorePort for InMemoryTokenStore {
    async fn save(&self, token: &DomainToken) -> Result<(), TokenStoreError> {
        if self.fail_io.load(Ordering::SeqCst) {
            return Err(TokenStoreError::Storage("read-only file system".into()));
        }
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<DomainToken>, TokenStoreError> {
        if self.fail_io.load(Ordering::SeqCst) {
            return Err(TokenStoreError::Storage("permission denied".into()));
        }
        Ok(self.current())
    }
}

/// Keeps every raw signature with HTML, untouched.
pub struct PassThroughNormalizer;

impl SignatureNormalizerPort for PassThroughNormalizer {
    fn normalize(&self, raw: &RawSignature) -> Option<Signature> {
        if !raw.has_html() {
            return None;
        }
        raw.html
            .as_deref()
            .map(|html| Signature::new(raw.name.clone(), html))
    }
}

/// Answers after a short sleep so overlapping callers really overlap.
pub struct SlowCountingApi {
    response: Vec<RawSignature>,
    calls: AtomicUsize,
}

impl SlowCountingApi {
    pub fn new(response: Vec<RawSignature>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignatureApiPort for SlowCountingApi {
    async fn fetch_signatures(
        &self,
        _token: &DomainToken,
        _diagnostics: &HostDiagnostics,
    ) -> Result<Vec<RawSignature>, SignatureApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(self.response.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Shown {
        signatures: Vec<Signature>,
        status: FetchStatus,
    },
    Cleared(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<PresenterEvent>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignaturePresenterPort for RecordingPresenter {
    async fn show_signatures(
        &self,
        signatures: &[Signature],
        status: FetchStatus,
    ) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(PresenterEvent::Shown {
            signatures: signatures.to_vec(),
            status,
        });
        Ok(())
    }

    async fn clear(&self, message: &str) -> anyhow::Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(PresenterEvent::Cleared(message.to_string()));
        Ok(())
    }
}
