// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::{Parser, Subcommand};
use futures_util::{Stream, StreamExt};
use minio_transform::s3::creds::EnvProvider;
use minio_transform::s3::error::Error;
use minio_transform::s3::http::BaseUrl;
use minio_transform::s3::types::{NotificationRecords, S3Api};
use minio_transform::s3::{MinioClient, MinioClientBuilder};
use minio_transform::transform::{
    MemoryStore, Notification, ObjectStore, TransformConfig, TransformHandler, TransformResponse,
    destination_key,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::task::JoinSet;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Uppercase newly created objects into a destination bucket.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// S3 endpoint, e.g. http://localhost:9000
    #[arg(
        long,
        env = "MINIO_ENDPOINT",
        default_value = "http://localhost:9000",
        global = true
    )]
    endpoint: String,
    /// Region used to sign requests
    #[arg(long, env = "MINIO_REGION", global = true)]
    region: Option<String>,
    /// Bucket transformed objects are written to; DESTINATION_BUCKET when omitted
    #[arg(long, global = true)]
    destination_bucket: Option<String>,
    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    insecure: bool,
    /// Request timeout in seconds for `handle`; `listen` streams are never timed out
    #[arg(long, global = true, default_value_t = 300)]
    timeout_secs: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Handle one notification read from a file or stdin and print the response
    Handle {
        /// Event JSON file; stdin when omitted or '-'
        event: Option<PathBuf>,
        /// Use an in-process object store instead of the S3 endpoint
        #[arg(long)]
        memory: bool,
        /// File stored at the notification's source location before handling
        #[arg(long, requires = "memory")]
        seed: Option<PathBuf>,
        /// File the transformed object is written to after handling
        #[arg(long, requires = "memory")]
        output: Option<PathBuf>,
    },
    /// Listen for object created events on a bucket and handle each notification
    Listen {
        /// Source bucket to listen on
        bucket: String,
        /// Only objects whose key starts with this prefix
        #[arg(long)]
        prefix: Option<String>,
        /// Only objects whose key ends with this suffix
        #[arg(long)]
        suffix: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, BoxError> {
    let config = match &cli.destination_bucket {
        Some(bucket) => TransformConfig::new(bucket.as_str()),
        None => TransformConfig::from_env(),
    };
    if !config.is_complete() {
        log::warn!("destination bucket is not configured; every notification will fail");
    }

    match cli.command {
        Command::Handle {
            ref event,
            memory,
            ref seed,
            ref output,
        } => {
            let payload = read_payload(event.as_ref()).await?;
            let resp = if memory {
                handle_in_memory(config, &payload, seed.as_ref(), output.as_ref()).await?
            } else {
                let client = create_client(&cli, Some(Duration::from_secs(cli.timeout_secs)))?;
                let handler = TransformHandler::new(Arc::new(client), config);
                handler.handle_payload(&payload).await
            };
            println!("{}", resp.to_json()?);
            Ok(ExitCode::from(exit_status(resp.is_success())))
        }
        Command::Listen {
            ref bucket,
            ref prefix,
            ref suffix,
        } => {
            let client = create_client(&cli, None)?;
            listen(client, config, bucket, prefix.clone(), suffix.clone()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn create_client(cli: &Cli, timeout: Option<Duration>) -> Result<MinioClient, BoxError> {
    let mut base_url: BaseUrl = cli.endpoint.parse()?;
    if let Some(region) = &cli.region {
        base_url.region = region.clone();
    }

    let provider = if EnvProvider::is_configured() {
        Some(EnvProvider)
    } else {
        log::warn!("no credentials found in the environment; sending anonymous requests");
        None
    };

    let client = MinioClientBuilder::new(base_url)
        .provider(provider)
        .ignore_cert_check(Some(cli.insecure))
        .timeout(timeout)
        .build()?;
    Ok(client)
}

async fn read_payload(path: Option<&PathBuf>) -> Result<Vec<u8>, BoxError> {
    match path {
        Some(p) if p.as_os_str() != "-" => Ok(tokio::fs::read(p).await?),
        _ => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            Ok(buf)
        }
    }
}

async fn handle_in_memory(
    config: TransformConfig,
    payload: &[u8],
    seed: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<TransformResponse, BoxError> {
    let store = Arc::new(MemoryStore::new());
    let notification = Notification::from_slice(payload).ok();

    if let (Some(n), Some(seed)) = (&notification, seed) {
        let content = tokio::fs::read(seed).await?;
        store.insert(&n.source_bucket, &n.source_key, content);
    }

    let handler = TransformHandler::new(store.clone(), config.clone());
    let resp = handler.handle_payload(payload).await;

    if let (true, Some(n), Some(output)) = (resp.is_success(), &notification, output) {
        let bucket = config.destination_bucket()?;
        if let Some(content) = store.object(bucket, &destination_key(&n.source_key)) {
            tokio::fs::write(output, &content).await?;
            log::info!("wrote {} bytes to {}", content.len(), output.display());
        }
    }

    Ok(resp)
}

async fn listen(
    client: MinioClient,
    config: TransformConfig,
    bucket: &str,
    prefix: Option<String>,
    suffix: Option<String>,
) -> Result<(), BoxError> {
    if config.destination_bucket().ok() == Some(bucket) {
        log::warn!(
            "destination bucket is the listened bucket '{bucket}'; written objects will trigger further notifications"
        );
    }

    let (_resp, stream) = client
        .listen_bucket_notification(bucket)
        .prefix(prefix)
        .suffix(suffix)
        .events(vec!["s3:ObjectCreated:*".to_string()])
        .build()
        .send()
        .await?;
    log::info!("listening for object created events on bucket '{bucket}'");

    let handler = TransformHandler::new(Arc::new(client), config);
    let handled = dispatch(&handler, stream, bucket).await;
    log::info!("notification stream on bucket '{bucket}' ended after {handled} notifications");
    Ok(())
}

/// Runs one handler invocation per object created notification on `stream`.
///
/// Undecodable notifications are logged and skipped. Returns once the stream
/// has ended and every invocation has completed, with the number of
/// invocations started.
async fn dispatch<S, N>(handler: &TransformHandler<S>, mut stream: N, bucket: &str) -> usize
where
    S: ObjectStore + 'static,
    N: Stream<Item = Result<NotificationRecords, Error>> + Unpin,
{
    let mut tasks = JoinSet::new();
    let mut started = 0;
    while let Some(event) = stream.next().await {
        while let Some(res) = tasks.try_join_next() {
            log_join(res);
        }

        let event = match event {
            Ok(v) => v,
            Err(e) => {
                log::error!("skipping notification on bucket '{bucket}': {e}");
                continue;
            }
        };
        if !event.records.first().is_some_and(|r| r.is_object_created()) {
            log::debug!("skipping notification without an object created record");
            continue;
        }
        let handler = handler.clone();
        tasks.spawn(async move {
            let resp = handler.handle(&event).await;
            log::debug!("{} {}", resp.status_code, resp.body);
        });
        started += 1;
    }

    if !tasks.is_empty() {
        log::info!("waiting for {} running invocations", tasks.len());
    }
    while let Some(res) = tasks.join_next().await {
        log_join(res);
    }
    started
}

fn log_join(res: Result<(), tokio::task::JoinError>) {
    if let Err(e) = res {
        log::error!("handler invocation did not complete: {e}");
    }
}

/// Process exit status for a handled notification: 0 for a 200 response, 1 otherwise.
fn exit_status(success: bool) -> u8 {
    if success { 0 } else { 1 }
}
