use std::path::Path;
use tokio::fs::{File, OpenOptions, write};
use tokio::io::AsyncWriteExt;

pub async fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    write(path, data).await?;
    Ok(())
}

pub fn write_file_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, data)
}

pub async fn append_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}

pub fn append_file_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::options().create(true).append(true).open(path)?;
    file.write_all(data)?;
    file.flush()
}

pub async fn create_new_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create_new(path).await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}

pub fn create_new_file_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create_new(path)?;
    file.write_all(data)?;
    file.flush()
}
