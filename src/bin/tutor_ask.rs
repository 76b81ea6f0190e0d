use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tutor_relay::{
    client::{ChatSession, RelayClient},
    tutor::Subject,
};

/// Ask the tutor a question from the terminal
#[derive(Parser, Debug)]
#[command(name = "tutor-ask", version)]
struct Args {
    /// Base URL of the tutor relay server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Subject of the conversation (Math, Science, English, Social Studies)
    #[arg(long, default_value = "Math")]
    subject: Subject,

    /// First doubt; when omitted it is read from stdin
    doubt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut session = ChatSession::new(RelayClient::new(&args.server), args.subject);

    println!("Tutor ({}) - type 'exit' to quit", args.subject);

    if let Some(doubt) = args.doubt {
        println!("you> {}", doubt);
        if let Some(turn) = session.send(&doubt).await {
            println!("tutor> {}\n", turn.text);
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        if let Some(turn) = session.send(&line).await {
            println!("tutor> {}\n", turn.text);
        }
    }

    Ok(())
}
