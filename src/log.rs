//! Logging functionality and error reporting.
//! The logging library of choice is [tracing].

use poise::BoxFuture;
use poise::FrameworkError;
use serenity::CreateMessage;
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::serenity;
use crate::Config;
use crate::Data;
use crate::MinccinoError;

/// The name of this crate, used to set filter target.
const THIS_CRATE: &str = env!("CARGO_CRATE_NAME");

/// Setup format layers, tracing subscribers, and installs tracing.
/// The returned guard must be kept alive for file logs to be flushed.
pub(super) fn install_tracing(config: &Config) -> Option<WorkerGuard> {
    // Uses local time.
    let timer = fmt::time::ChronoLocal::rfc_3339();
    let debug = config.console_debug();

    // By default, all INFO traces and above are shown.
    let target = if debug {
        Targets::new()
            .with_default(LevelFilter::INFO)
            .with_target(THIS_CRATE, LevelFilter::DEBUG)
    } else {
        Targets::new().with_default(LevelFilter::INFO)
    };

    // Source locations are only worth the noise in debug mode.
    let console_layer = fmt::layer()
        .with_ansi(true)
        .with_file(debug)
        .with_level(true)
        .with_line_number(debug)
        .with_target(true)
        .with_timer(timer.clone())
        .pretty()
        .with_filter(target.clone());

    // Put file logs in `log_dir` as "{THIS_CRATE}.log.{TIMESTAMP}", rolled hourly.
    let (log_layer, guard) = if config.logs_enabled() {
        let appender = tracing_appender::rolling::hourly(config.log_dir(), format!("{THIS_CRATE}.log"));
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let layer = fmt::layer()
            .with_ansi(false)
            .with_file(debug)
            .with_level(true)
            .with_line_number(debug)
            .with_target(true)
            .with_timer(timer)
            .with_writer(writer)
            .compact()
            .with_filter(target);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(log_layer)
        .init();

    guard
}

/// Defines how framework errors are handled.
/// Nothing here is ever shown to players; failures are logged and, for
/// unexpected ones, reported to the notify list.
pub fn handle_framework_error(err: FrameworkError<Data, MinccinoError>) -> BoxFuture<()> {
    let handler = async move {
        match err {
            FrameworkError::Setup { error, .. } => error!("Error during startup: {error}"),
            FrameworkError::EventHandler {
                error,
                ctx,
                event,
                framework,
                ..
            } => {
                Report::builder()
                    .ctx(ctx)
                    .data(framework.user_data)
                    .source(error)
                    .add_info(event.snake_case_name())
                    .notify(true)
                    .build()
                    .send()
                    .await;
            }
            // There are no commands, anything else is unexpected.
            other => {
                if let Err(e) = poise::builtins::on_error(other).await {
                    error!("Error while handling error: {e}")
                }
            }
        }
    };

    Box::pin(handler)
}

/// Sends a notification (via private message) to users in the notify list.
/// If message fails, only log and don't retry.
async fn notify_bug(ctx: &serenity::Context, data: &Data, content: impl Into<String>) {
    let message = CreateMessage::new().content(content);

    for user in &data.notify_list {
        if let Err(e) = user.direct_message(ctx, message.clone()).await {
            error!("Failed to send bug notification. {e}");
        }
    }
}

/// Structured report of an error raised outside of commands.
/// Always logs at [error level](tracing::error).
#[derive(bon::Builder)]
#[builder(on(String, into))]
struct Report<'a> {
    /// Used to send notifications.
    ctx: &'a serenity::Context,
    /// Holds the notify list.
    data: &'a Data,
    /// The error being reported.
    source: MinccinoError,
    /// Additional information to log
    add_info: Option<String>,
    /// Set to `true` to send notifications of the error.
    #[builder(default = false)]
    notify: bool,
}

impl Report<'_> {
    /// Execute the report
    async fn send(&self) {
        let source = &self.source;
        let log_message = match &self.add_info {
            Some(info) => format!("{source} | {info}"),
            None => source.to_string(),
        };

        error!("{log_message}");

        if self.notify {
            notify_bug(self.ctx, self.data, format!("Bug report: {log_message}")).await;
        }
    }
}
