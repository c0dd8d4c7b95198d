use cipher_bind::{CipherBinder, Ciphertext, Error, Plaintext};

fn main() -> Result<(), Error> {
    let data = "示例数据: 同步加解密";

    println!("\n[文本路径开始]");
    let binder = CipherBinder::new("correct-horse");
    println!("算法: {}", binder.algorithm());
    let ciphertext = binder.encrypt(&Plaintext::from(data))?;
    if let Ciphertext::Hex(encoded) = &ciphertext {
        println!("密文(hex): {}", encoded);
    }
    let plaintext = binder.decrypt(&ciphertext, false)?;
    println!("[文本路径] 解密成功: {:?}", plaintext);

    println!("\n[字节路径开始]");
    let raw = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
    let ciphertext = binder.encrypt(&Plaintext::from(raw.clone()))?;
    let plaintext = binder.decrypt(&ciphertext, true)?;
    assert_eq!(plaintext, Plaintext::Bytes(raw));
    println!("[字节路径] 解密成功");

    Ok(())
}
