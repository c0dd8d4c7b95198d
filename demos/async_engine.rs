#![cfg(feature = "async-engine")]
use cipher_bind::{CipherBinder, Error, Plaintext};
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let binder = CipherBinder::new("correct-horse");
    let data = Plaintext::from("示例数据: 异步加解密");

    println!("\n[future 形式开始]");
    let ciphertext = binder.encrypt_async(&data).await?;
    let plaintext = binder.decrypt_async(&ciphertext, false).await?;
    assert_eq!(plaintext, data);
    println!("[future 形式] 解密成功: {:?}", plaintext);

    println!("\n[回调形式开始]");
    let (tx, rx) = oneshot::channel();
    binder.encrypt_with_callback(data.clone(), move |result| {
        tx.send(result).unwrap();
    });
    let ciphertext = rx.await.unwrap()?;

    let (tx, rx) = oneshot::channel();
    binder.decrypt_with_callback(ciphertext, false, move |result| {
        tx.send(result).unwrap();
    });
    let plaintext = rx.await.unwrap()?;
    assert_eq!(plaintext, data);
    println!("[回调形式] 解密成功");

    Ok(())
}
