//! 遗留的单参数密钥派生
//!
//! 复刻 OpenSSL `EVP_BytesToKey`（MD5、无盐、单轮迭代）：
//!
//! ```text
//! D_1 = MD5(secret)
//! D_i = MD5(D_{i-1} || secret)
//! key || iv = D_1 || D_2 || ...
//! ```
//!
//! 这是遗留 `createCipher` 式 API 的派生方案，密钥与 IV 完全由密钥串
//! 确定性地导出。保留它是为了与既有密文兼容；新设计应使用显式的
//! 密钥/IV 与随机 nonce。

use md5::{Digest, Md5};
use zeroize::Zeroizing;

/// 从密钥串派生 `key_size` 字节的密钥与 `iv_size` 字节的 IV。
///
/// 派生材料放在 [`Zeroizing`] 缓冲区中，离开作用域时清零。
pub fn evp_bytes_to_key(
    secret: &[u8],
    key_size: usize,
    iv_size: usize,
) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let mut derived = Zeroizing::new(Vec::with_capacity(key_size + iv_size));
    let mut previous = Zeroizing::new(Vec::new());

    while derived.len() < key_size + iv_size {
        let mut hasher = Md5::new();
        hasher.update(previous.as_slice());
        hasher.update(secret);
        let digest = hasher.finalize();
        derived.extend_from_slice(digest.as_slice());
        *previous = digest.as_slice().to_vec();
    }

    let iv = Zeroizing::new(derived[key_size..key_size + iv_size].to_vec());
    derived.truncate(key_size);
    (derived, iv)
}
