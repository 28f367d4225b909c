#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prepdeck_backend::run().await
}
