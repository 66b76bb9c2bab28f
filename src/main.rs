use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mindmap_cli::run_cli().await
}
