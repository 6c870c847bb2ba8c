#[tokio::main]
async fn main() -> std::io::Result<()> {
    surgirisk::run().await
}
