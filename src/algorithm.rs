//! 对称密码算法标识与密钥流实现
//!
//! 算法标识沿用 OpenSSL 风格的字符串（如 `aes-256-ctr`）。
//! 计数器模式（CTR）把分组密码变成流密码：加密与解密是同一种变换，
//! 流密码的 finalize 输出为空，因此一次密钥流即覆盖 update 与 finalize。
//!
//! 使用 `Ctr128BE`（128 位大端计数器），与 OpenSSL / 遗留 `createCipher`
//! 对 `aes-*-ctr` 标识的语义一致。

use crate::error::Error;
use aes::{Aes128, Aes192, Aes256};
use ctr::Ctr128BE;
use ctr::cipher::{KeyIvInit, StreamCipher};
use std::fmt;
use std::str::FromStr;

/// IV 长度（一个 AES 分组，对所有密钥规格相同）
pub const IV_SIZE: usize = 16;

type Aes128Ctr = Ctr128BE<Aes128>;
type Aes192Ctr = Ctr128BE<Aes192>;
type Aes256Ctr = Ctr128BE<Aes256>;

/// 受支持的对称密码算法
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CipherAlgorithm {
    /// AES-128 计数器模式
    Aes128Ctr,
    /// AES-192 计数器模式
    Aes192Ctr,
    /// AES-256 计数器模式（默认）
    #[default]
    Aes256Ctr,
}

impl CipherAlgorithm {
    /// 密钥的期望长度（以字节为单位）
    pub const fn key_size(&self) -> usize {
        match self {
            Self::Aes128Ctr => 16,
            Self::Aes192Ctr => 24,
            Self::Aes256Ctr => 32,
        }
    }

    /// 算法的字符串标识
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aes128Ctr => "aes-128-ctr",
            Self::Aes192Ctr => "aes-192-ctr",
            Self::Aes256Ctr => "aes-256-ctr",
        }
    }

    /// 构造一个全新的密码上下文并就地应用密钥流。
    ///
    /// 每次调用都是独立的上下文，调用之间不共享任何可变状态。
    pub fn apply_keystream(&self, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<(), Error> {
        match self {
            Self::Aes128Ctr => Aes128Ctr::new_from_slices(key, iv)
                .map_err(|e| Error::CipherInit(e.to_string()))?
                .apply_keystream(buf),
            Self::Aes192Ctr => Aes192Ctr::new_from_slices(key, iv)
                .map_err(|e| Error::CipherInit(e.to_string()))?
                .apply_keystream(buf),
            Self::Aes256Ctr => Aes256Ctr::new_from_slices(key, iv)
                .map_err(|e| Error::CipherInit(e.to_string()))?
                .apply_keystream(buf),
        }
        Ok(())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aes-128-ctr" => Ok(Self::Aes128Ctr),
            "aes-192-ctr" => Ok(Self::Aes192Ctr),
            "aes-256-ctr" => Ok(Self::Aes256Ctr),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_identifiers() {
        assert_eq!(
            "aes-128-ctr".parse::<CipherAlgorithm>().unwrap(),
            CipherAlgorithm::Aes128Ctr
        );
        assert_eq!(
            "aes-192-ctr".parse::<CipherAlgorithm>().unwrap(),
            CipherAlgorithm::Aes192Ctr
        );
        assert_eq!(
            "aes-256-ctr".parse::<CipherAlgorithm>().unwrap(),
            CipherAlgorithm::Aes256Ctr
        );
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let result = "aes-256-gcm".parse::<CipherAlgorithm>();
        assert!(matches!(result, Err(Error::UnknownAlgorithm(s)) if s == "aes-256-gcm"));
    }

    #[test]
    fn test_display_roundtrip() {
        for algorithm in [
            CipherAlgorithm::Aes128Ctr,
            CipherAlgorithm::Aes192Ctr,
            CipherAlgorithm::Aes256Ctr,
        ] {
            assert_eq!(
                algorithm.to_string().parse::<CipherAlgorithm>().unwrap(),
                algorithm
            );
        }
    }

    #[test]
    fn test_default_is_aes_256_ctr() {
        assert_eq!(CipherAlgorithm::default(), CipherAlgorithm::Aes256Ctr);
        assert_eq!(CipherAlgorithm::default().key_size(), 32);
    }

    #[test]
    fn test_keystream_is_an_involution() {
        // CTR 模式下加密与解密是同一种变换
        let key = [7u8; 32];
        let iv = [3u8; IV_SIZE];
        let original = b"counter mode keystream".to_vec();

        let mut buf = original.clone();
        CipherAlgorithm::Aes256Ctr
            .apply_keystream(&key, &iv, &mut buf)
            .unwrap();
        assert_ne!(buf, original);

        CipherAlgorithm::Aes256Ctr
            .apply_keystream(&key, &iv, &mut buf)
            .unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_keystream_rejects_bad_key_length() {
        let key = [0u8; 17];
        let iv = [0u8; IV_SIZE];
        let mut buf = [0u8; 4];
        let result = CipherAlgorithm::Aes128Ctr.apply_keystream(&key, &iv, &mut buf);
        assert!(matches!(result, Err(Error::CipherInit(_))));
    }
}
