//! 加解密操作的输入与输出表示
//!
//! 明文是文本或原始字节；输入的类型决定输出的编码：
//! 文本加密得到十六进制字符串，字节加密得到原始字节。
//! 密文本身不携带类型标记，解密时由调用方指定输出形式。

use serde::{Deserialize, Serialize};

/// 加密操作的输入 / 解密操作的输出
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plaintext {
    /// UTF-8 文本
    Text(String),
    /// 原始字节
    Bytes(Vec<u8>),
}

impl Plaintext {
    /// 以字节视图访问明文内容
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<&str> for Plaintext {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Plaintext {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&[u8]> for Plaintext {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Plaintext {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// 加密操作的输出 / 解密操作的输入
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ciphertext {
    /// 十六进制编码的密文（文本路径）
    Hex(String),
    /// 原始密文字节（字节路径）
    Bytes(Vec<u8>),
}

impl Ciphertext {
    /// 解出原始密文字节。`Hex` 变体做十六进制解码，`Bytes` 变体原样复制。
    pub fn to_raw_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        match self {
            Self::Hex(encoded) => hex::decode(encoded),
            Self::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

impl From<Vec<u8>> for Ciphertext {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}
