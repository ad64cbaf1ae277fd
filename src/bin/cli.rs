use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mcp_docs::cli::run().await
}
