use crate::bot::{Data, Error};
use crate::util::message;

/// Framework-level error handler. Lookup failures are answered inside the
/// command body; this reports whatever escapes it (a failed send, a panic,
/// an argument parse error).
pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!(error = %error, "Failed to set up commands");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(command = %ctx.command().name, error = %error, "Command failed");
            if let Err(e) = ctx.say(message::error_occurred(&error.to_string())).await {
                tracing::error!(error = %e, "Failed to report command error");
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!(error = %e, "Error while handling error");
            }
        }
    }
}
