use common::types::ServiceKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(ServiceKind::Accessories).await
}
