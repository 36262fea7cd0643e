#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    fitness_booking::run().await;
}
