use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use clap::Parser;
use summary_store::FsSummaryStore;
use video_digest::{
    openai::OpenAIClient,
    server::router,
    tracing::init_tracing_subscriber,
    yt::{audio_handler::YtDlpWrapper, ffmpeg::Ffmpeg, ytdlp::YtDlp},
    VideoSummaryProcessorBuilder,
};

#[derive(Parser)]
#[command(
    name = "video-digest",
    about = "Summarizes videos from their audio transcript"
)]
struct Cli {
    /// OpenAI API key, used for both transcription and summarization
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: Option<String>,

    /// OpenAI API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    openai_base_url: String,

    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Working directory for downloaded and transcoded audio
    #[arg(long, env = "WORKDIR", default_value = "/var/tmp/video-digest")]
    workdir: PathBuf,

    /// Directory saved summaries are written to
    #[arg(long, env = "SUMMARIES_DIR", default_value = "resumos")]
    summaries_dir: PathBuf,

    /// Path to yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,

    /// yt-dlp executable
    #[arg(long, env = "YTDLP_PATH", default_value = "yt-dlp")]
    ytdlp_path: PathBuf,

    /// ffmpeg executable
    #[arg(long, env = "FFMPEG_PATH", default_value = "ffmpeg")]
    ffmpeg_path: PathBuf,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let Some(openai_key) = cli.openai_key.filter(|key| !key.trim().is_empty()) else {
        tracing::error!("OPENAI_API_KEY is not set, add it to the environment or a .env file");
        std::process::exit(1);
    };

    tokio::fs::create_dir_all(&cli.workdir)
        .await
        .with_context(|| format!("Failed to create workdir {}", cli.workdir.display()))?;

    //XXX: handles both transcription and summarization; hence will need to be cloned
    let openai_client = OpenAIClient::new(openai_key).with_base_url(cli.openai_base_url);
    let yt_dlp = YtDlp::new_with_cookies(cli.cookies_path).with_binary(cli.ytdlp_path);
    let ffmpeg = Ffmpeg::new().with_binary(cli.ffmpeg_path);
    let store = FsSummaryStore::new(&cli.summaries_dir);

    let processor = VideoSummaryProcessorBuilder::new(&cli.workdir)
        .metadata_fetcher(YtDlpWrapper::new(yt_dlp.clone()))
        .audio_handler(YtDlpWrapper::with_audio_processor(yt_dlp, ffmpeg))
        .transcriber(openai_client.clone())
        .summarizer(openai_client)
        .store(store)
        .build();

    let app = router(Arc::new(processor));

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        workdir = %cli.workdir.display(),
        summaries_dir = %cli.summaries_dir.display(),
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
