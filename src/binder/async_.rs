//! 异步密钥绑定器扩展
//!
//! 异步变体不引入任何 CPU 并行：它们只是把同步操作推迟到协作式
//! 调度器的下一轮再执行。future 形式把结果（或错误）通过 `.await`
//! 返回；回调形式在产生结果后恰好调用回调一次，两者不会同时出现。
use super::sync_::CipherBinder;
use crate::error::Error;
use crate::payload::{Ciphertext, Plaintext};

impl CipherBinder {
    /// 异步加密。先让出当前轮次，再执行与 [`CipherBinder::encrypt`]
    /// 完全相同的同步逻辑，结果与同步形式一致。
    pub async fn encrypt_async(&self, plaintext: &Plaintext) -> Result<Ciphertext, Error> {
        tokio::task::yield_now().await;
        self.encrypt(plaintext)
    }

    /// 异步解密，语义同 [`CipherBinder::decrypt`]。
    pub async fn decrypt_async(
        &self,
        ciphertext: &Ciphertext,
        as_bytes: bool,
    ) -> Result<Plaintext, Error> {
        tokio::task::yield_now().await;
        self.decrypt(ciphertext, as_bytes)
    }

    /// 回调形式的异步加密。
    ///
    /// 在 Tokio 运行时上调度一个任务：让出一轮后执行同步加密，
    /// 把 `Ok(密文)` 或 `Err(错误)` 交给回调。回调恰好被调用一次，
    /// 且绝不会在本函数返回之前同步发生。不返回任何 future。
    ///
    /// 任务一经调度便无法取消，必须在 Tokio 运行时上下文中调用。
    pub fn encrypt_with_callback<F>(&self, plaintext: Plaintext, callback: F)
    where
        F: FnOnce(Result<Ciphertext, Error>) + Send + 'static,
    {
        let binder = self.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            callback(binder.encrypt(&plaintext));
        });
    }

    /// 回调形式的异步解密，调用约定同 [`CipherBinder::encrypt_with_callback`]。
    pub fn decrypt_with_callback<F>(&self, ciphertext: Ciphertext, as_bytes: bool, callback: F)
    where
        F: FnOnce(Result<Plaintext, Error>) + Send + 'static,
    {
        let binder = self.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            callback(binder.decrypt(&ciphertext, as_bytes));
        });
    }
}
