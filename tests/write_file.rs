use tempfile::tempdir;
use tokio::fs;

use writefile::{
    Encoding, WriteError, WriteOptions, write_file, write_file_sync, write_file_sync_with,
    write_file_with,
};

#[tokio::test]
async fn writes_string_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file(&path, "beep boop 1").await.unwrap();

    assert_eq!(fs::read_to_string(&path).await.unwrap(), "beep boop 1");
}

#[tokio::test]
async fn writes_binary_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file(&path, &b"beep boop 2"[..]).await.unwrap();

    assert_eq!(fs::read(&path).await.unwrap(), b"beep boop 2");
}

#[tokio::test]
async fn accepts_an_encoding_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");
    let opts: WriteOptions = "utf8".parse().unwrap();

    write_file_with(&path, "beep boop 3", opts).await.unwrap();

    assert_eq!(fs::read_to_string(&path).await.unwrap(), "beep boop 3");
}

#[tokio::test]
async fn accepts_an_options_struct() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");
    let opts = WriteOptions::new().encoding(Encoding::Utf8);

    write_file_with(&path, "beep boop 4", opts).await.unwrap();

    assert_eq!(fs::read_to_string(&path).await.unwrap(), "beep boop 4");
}

#[tokio::test]
async fn encoding_name_and_options_struct_agree() {
    let dir = tempdir().unwrap();
    let by_name = dir.path().join("by_name.txt");
    let by_struct = dir.path().join("by_struct.txt");

    let name_opts: WriteOptions = "utf16le".parse().unwrap();
    write_file_with(&by_name, "beep boop", name_opts).await.unwrap();

    let struct_opts = WriteOptions::new().encoding(Encoding::Utf16Le);
    write_file_with(&by_struct, "beep boop", struct_opts)
        .await
        .unwrap();

    assert_eq!(
        fs::read(&by_name).await.unwrap(),
        fs::read(&by_struct).await.unwrap()
    );
}

#[tokio::test]
async fn base64_text_lands_decoded_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file_with(&path, "YmVlcCBib29w", Encoding::Base64)
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).await.unwrap(), "beep boop");
}

#[tokio::test]
async fn hex_text_lands_decoded_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file_with(&path, "6265657020626f6f70", Encoding::Hex)
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).await.unwrap(), "beep boop");
}

#[tokio::test]
async fn missing_parent_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let fixture = dir.path().join("file.txt");
    write_file(&fixture, "beep boop").await.unwrap();

    let bad = dir.path().join("beepboopbapbop/dkfjldjfaklsjf/file.txt");
    let err = write_file(&bad, "beepboopbapbop").await.unwrap_err();
    assert!(matches!(err, WriteError::Io(_)));

    // the failed call touched nothing else
    assert_eq!(fs::read_to_string(&fixture).await.unwrap(), "beep boop");
}

#[tokio::test]
async fn missing_parent_directory_is_an_error_with_options() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("beepboopbapbop/dkfjldjfaklsjf/file.txt");

    let by_name: WriteOptions = "utf8".parse().unwrap();
    assert!(write_file_with(&bad, "beep", by_name).await.is_err());

    let by_struct = WriteOptions::new().encoding(Encoding::Utf8);
    assert!(write_file_with(&bad, "beep", by_struct).await.is_err());
}

#[test]
fn sync_writes_string_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file_sync(&path, "beep boop 1").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "beep boop 1");
}

#[test]
fn sync_writes_binary_data_with_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file_sync_with(&path, b"beep boop 2".to_vec(), WriteOptions::new()).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"beep boop 2");
}

#[test]
fn sync_missing_parent_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("beepboopbapbop/file.txt");

    let err = write_file_sync(&bad, "beep").unwrap_err();
    assert!(matches!(err, WriteError::Io(_)));
}

#[tokio::test]
async fn writes_empty_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("file.txt");

    write_file(&path, "").await.unwrap();

    assert_eq!(fs::read(&path).await.unwrap(), Vec::<u8>::new());
}
