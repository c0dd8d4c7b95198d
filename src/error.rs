//! 加解密操作可能遇到的错误类型
//!
//! 本 crate 不做任何日志、重试或恢复；底层原语的错误原样向调用方传播，
//! 由调用方决定如何处理。

use thiserror::Error;

/// 绑定器操作可能遇到的错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 算法标识符无法识别。只会在执行加解密操作时出现，构造绑定器不做校验。
    #[error("Unknown cipher algorithm: {0}")]
    UnknownAlgorithm(String),

    /// 密码原语初始化失败（密钥或 IV 长度不合法）
    #[error("Cipher initialization failed: {0}")]
    CipherInit(String),

    /// 十六进制密文解码失败
    #[error("Hex decoding failed: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// 解密结果不是合法的 UTF-8。
    /// 常见原因：密钥错误，或调用方对字节路径的密文使用了文本输出。
    #[error("Decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
