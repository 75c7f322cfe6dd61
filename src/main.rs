use std::path::Path;

use writefile::{Encoding, WriteOptions, write_file, write_file_sync_with, write_file_with};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = Path::new("./beep.txt");

    match write_file(path, "beep boop 1").await {
        Ok(_) => {}
        Err(e) => {
            println!("{:?}", e);
        }
    };

    let opts = WriteOptions::new().encoding(Encoding::Base64);
    match write_file_with(path, "YmVlcCBib29wIDI=", opts).await {
        Ok(_) => {}
        Err(e) => {
            println!("{:?}", e);
        }
    };

    match write_file_sync_with(path, "beep boop 3", Encoding::Utf8) {
        Ok(_) => {}
        Err(e) => {
            println!("{:?}", e);
        }
    };

    match tokio::fs::read_to_string(path).await {
        Ok(contents) => println!("{:?}", contents),
        Err(e) => println!("{:?}", e),
    }
}
