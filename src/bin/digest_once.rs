//! Run a single digest outside the HTTP service (cron / systemd timer).

use tech_digest_notifier::{DigestConfig, DigestJob, RunOutcome};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tech_digest_notifier::init_tracing();

    let job = DigestJob::new(DigestConfig::from_env(), reqwest::Client::new());

    match job.invoke().await {
        RunOutcome::Success => println!("ok"),
        RunOutcome::Failure(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
