use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    recommender::cli::run(std::env::args().skip(1)).await
}
