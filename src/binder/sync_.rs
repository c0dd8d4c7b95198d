//! 同步密钥绑定器 `CipherBinder`
use crate::algorithm::{CipherAlgorithm, IV_SIZE};
use crate::error::Error;
use crate::kdf::evp_bytes_to_key;
use crate::payload::{Ciphertext, Plaintext};
use secrecy::{ExposeSecret, SecretSlice};

/// `CipherBinder`：把密钥与算法标识绑定为一组加解密操作。
///
/// 密钥由 [`SecretSlice`] 持有：`Debug` 输出只有 `[REDACTED]`，
/// 不存在任何暴露密钥的访问器，绑定器也不实现 `Serialize`。
/// 密钥只能通过四个绑定操作间接使用。
///
/// 构造时不做任何校验；算法标识不合法或密钥与算法不匹配，
/// 只会在之后执行加解密操作时报错。
#[derive(Debug)]
pub struct CipherBinder {
    algorithm: String,
    secret: SecretSlice<u8>,
}

impl CipherBinder {
    /// 使用默认算法 `aes-256-ctr` 创建绑定器。密钥可以是文本或字节。
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::with_algorithm(secret, CipherAlgorithm::default().as_str())
    }

    /// 使用指定算法标识创建绑定器。标识在此处不做解析。
    pub fn with_algorithm(secret: impl AsRef<[u8]>, algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            secret: SecretSlice::from(secret.as_ref().to_vec()),
        }
    }

    /// 绑定的算法标识
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// 解析算法、派生密钥/IV，并在全新的密码上下文中就地应用密钥流。
    ///
    /// 每次调用独立构造上下文，调用之间不共享可变状态，
    /// 因此同一绑定器上的并发调用互不干扰。
    fn transform(&self, buf: &mut [u8]) -> Result<(), Error> {
        let algorithm: CipherAlgorithm = self.algorithm.parse()?;
        let (key, iv) = evp_bytes_to_key(
            self.secret.expose_secret(),
            algorithm.key_size(),
            IV_SIZE,
        );
        algorithm.apply_keystream(&key, &iv, buf)
    }

    /// 加密一段明文。
    ///
    /// 文本输入得到十六进制字符串（[`Ciphertext::Hex`]），
    /// 字节输入得到原始密文字节（[`Ciphertext::Bytes`]）。
    /// 密钥/IV 由密钥串确定性派生，相同输入总是得到相同密文。
    pub fn encrypt(&self, plaintext: &Plaintext) -> Result<Ciphertext, Error> {
        match plaintext {
            Plaintext::Text(text) => {
                let mut buf = text.clone().into_bytes();
                self.transform(&mut buf)?;
                Ok(Ciphertext::Hex(hex::encode(buf)))
            }
            Plaintext::Bytes(bytes) => {
                let mut buf = bytes.clone();
                self.transform(&mut buf)?;
                Ok(Ciphertext::Bytes(buf))
            }
        }
    }

    /// 解密一段密文。
    ///
    /// 密文不携带原始类型标记，`as_bytes` 必须与加密时的路径一致：
    /// `false` 时把结果按 UTF-8 解释为文本，`true` 时返回原始字节。
    /// 不一致的用法表现为 UTF-8 错误或乱码，而不会被检测出来。
    pub fn decrypt(&self, ciphertext: &Ciphertext, as_bytes: bool) -> Result<Plaintext, Error> {
        let mut buf = ciphertext.to_raw_bytes()?;
        self.transform(&mut buf)?;
        if as_bytes {
            Ok(Plaintext::Bytes(buf))
        } else {
            Ok(Plaintext::Text(String::from_utf8(buf)?))
        }
    }
}

impl Clone for CipherBinder {
    fn clone(&self) -> Self {
        Self {
            algorithm: self.algorithm.clone(),
            secret: SecretSlice::from(self.secret.expose_secret().to_vec()),
        }
    }
}
