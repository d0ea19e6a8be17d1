use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use clap::Parser;
use imagine::client::{
    enums::phase::Phase,
    models::ui_state::UiState,
    service::ProxyClient,
    session::{Session, SubmitOutcome},
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::JoinSet,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "imagine-cli")]
#[command(about = "Generate images from text prompts through the image proxy")]
struct CliArgs {
    /// Base URL of the image proxy.
    #[arg(long, env = "IMAGINE_SERVER_URL", default_value = "http://localhost:5000")]
    server_url: String,

    /// Seconds to wait for a single generation.
    #[arg(long, default_value_t = 90)]
    timeout_secs: u64,

    /// Write the latest generated PNG to this file.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

type CliSession = Session<ProxyClient>;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "imagine=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let client = match ProxyClient::new(&args.server_url, Duration::from_secs(args.timeout_secs)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to initialize client: {}", e);
            std::process::exit(1);
        }
    };

    let session = Arc::new(Session::new(client));
    let api_status = session.probe_api_status().await;
    println!("API status: {}", api_status.value());
    println!("Enter a prompt for image generation (Ctrl-D to quit).");

    let output = Arc::new(args.output);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut generations = JoinSet::new();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        };

        // one line is one Enter press; the prompt is claimed before the next line is read
        match session.start_submit(line).await {
            Ok(prompt) => {
                render(&session.snapshot().await);
                generations.spawn(complete(session.clone(), prompt, output.clone()));
            }
            Err(SubmitOutcome::Busy) => println!("Still generating, please wait..."),
            Err(_) => render(&session.snapshot().await),
        }
    }

    while let Some(result) = generations.join_next().await {
        if let Err(e) = result {
            eprintln!("Generation task failed: {}", e);
        }
    }
}

async fn complete(session: Arc<CliSession>, prompt: String, output: Arc<Option<PathBuf>>) {
    let state = session.complete(prompt).await;
    render(&state);

    if let (Some(image_url), Some(path)) = (state.image_url(), output.as_deref()) {
        save_image(image_url, path).await;
    }
}

fn render(state: &UiState) {
    match &state.phase {
        Phase::Idle => {}
        Phase::Submitting => println!("Generating your image..."),
        Phase::Success { image_url } => {
            println!("Image ready ({} characters of data URI).", image_url.len())
        }
        Phase::Failed { error } => println!("Error: {}", error),
    }
}

async fn save_image(image_url: &str, path: &Path) {
    let Some((_, payload)) = image_url.split_once(";base64,") else {
        eprintln!("Image is not a base64 data URI");
        return;
    };

    let bytes = match base64::decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Could not decode image: {}", e);
            return;
        }
    };

    match tokio::fs::write(path, bytes).await {
        Ok(_) => println!("Saved to {}", path.display()),
        Err(e) => eprintln!("Could not write {}: {}", path.display(), e),
    }
}
