//! 密钥绑定器模块

#[cfg(feature = "async-engine")]
mod async_;
mod sync_;

pub use sync_::CipherBinder;
