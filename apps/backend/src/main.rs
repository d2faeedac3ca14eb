#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcards_quiz_backend::run().await
}
