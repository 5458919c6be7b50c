//! Keyed signature builders
//!
//! Actions take the body as an argument:
//! `Signature::sha1().with_keys(public, private).compute(body).await`

use crate::{
    AsyncSignatureResult, AsyncSignatureResultWithError, HashFunc, KeyedHasher,
    Result as SignatureResult, SignatureError,
};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Signature builder with a digest function chosen
#[derive(Clone, Debug)]
pub struct SignatureBuilder {
    hasher: KeyedHasher,
}

/// Signature builder with a key pair
pub struct SignatureBuilderWithKeys {
    hasher: KeyedHasher,
    public_key: Vec<u8>,
    private_key: Zeroizing<Vec<u8>>,
}

/// Signature builder with a result handler
pub struct SignatureBuilderWithHandler<F, T> {
    keyed: SignatureBuilderWithKeys,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

/// Signature builder with an error handler
pub struct SignatureBuilderWithError<E> {
    keyed: SignatureBuilderWithKeys,
    error_handler: E,
}

impl Default for SignatureBuilder {
    fn default() -> Self {
        Self::new(HashFunc::sha1())
    }
}

impl SignatureBuilder {
    /// Create a builder for `hash_func`
    pub fn new(hash_func: impl Into<HashFunc>) -> Self {
        Self {
            hasher: KeyedHasher::new(hash_func),
        }
    }

    /// Digest function this builder will apply
    #[must_use]
    pub fn hash_func(&self) -> &HashFunc {
        self.hasher.hash_func()
    }

    /// Attach the public and private key
    pub fn with_keys<P, K>(self, public_key: P, private_key: K) -> SignatureBuilderWithKeys
    where
        P: Into<Vec<u8>>,
        K: Into<Vec<u8>>,
    {
        SignatureBuilderWithKeys {
            hasher: self.hasher,
            public_key: public_key.into(),
            private_key: Zeroizing::new(private_key.into()),
        }
    }

    /// Sign `body` with an empty key pair
    pub fn compute<T: Into<Vec<u8>>>(self, body: T) -> AsyncSignatureResult {
        self.with_keys(Vec::<u8>::new(), Vec::<u8>::new()).compute(body)
    }
}

impl SignatureBuilderWithKeys {
    /// Add `on_result` handler
    pub fn on_result<F, T>(self, handler: F) -> SignatureBuilderWithHandler<F, T>
    where
        F: FnOnce(SignatureResult<String>) -> T + Send + 'static,
        T: Send + 'static,
    {
        SignatureBuilderWithHandler {
            keyed: self,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Add `on_error` handler - transforms errors but passes through success
    pub fn on_error<E>(self, handler: E) -> SignatureBuilderWithError<E>
    where
        E: Fn(SignatureError) -> SignatureError + Send + Sync + 'static,
    {
        SignatureBuilderWithError {
            keyed: self,
            error_handler: handler,
        }
    }

    /// Sign `body` on a worker task
    pub fn compute<T: Into<Vec<u8>>>(self, body: T) -> AsyncSignatureResult {
        AsyncSignatureResult::new(self.spawn(body.into()))
    }

    fn sign(&self, body: &[u8]) -> String {
        self.hasher
            .hash_with_keys(body, &self.public_key, self.private_key.as_slice())
    }

    fn spawn(self, body: Vec<u8>) -> oneshot::Receiver<SignatureResult<String>> {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let digest = self.sign(&body);
            let _ = tx.send(Ok(digest));
        });

        rx
    }
}

impl<F, T> SignatureBuilderWithHandler<F, T>
where
    F: FnOnce(SignatureResult<String>) -> T + Send + 'static,
    T: Send + 'static,
{
    /// Sign `body` and pass the result through the handler
    pub async fn compute<D: Into<Vec<u8>>>(self, body: D) -> T {
        let body = body.into();
        let digest = self.keyed.sign(&body);
        tokio::task::yield_now().await;
        (self.result_handler)(Ok(digest))
    }
}

impl<E> SignatureBuilderWithError<E>
where
    E: Fn(SignatureError) -> SignatureError + Send + Sync + 'static,
{
    /// Add `on_result` handler after error handler
    pub fn on_result<F, T>(self, handler: F) -> SignatureBuilderWithHandler<F, T>
    where
        F: FnOnce(SignatureResult<String>) -> T + Send + 'static,
        T: Send + 'static,
    {
        self.keyed.on_result(handler)
    }

    /// Sign `body` on a worker task, transforming any error
    pub fn compute<D: Into<Vec<u8>>>(self, body: D) -> AsyncSignatureResultWithError<E> {
        let error_handler = self.error_handler;
        AsyncSignatureResultWithError::new(self.keyed.spawn(body.into()), error_handler)
    }
}
