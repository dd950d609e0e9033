//! # Entry Shell
//!
//! Routing plus the read/dispatch/redraw loop that turns typed commands into
//! [`ScreenEvent`](crate::screen::ScreenEvent)s. The loop is generic over its
//! input and output so it can be driven from stdin/stdout or from a test buffer.

pub mod command;
pub mod error;
pub mod router;

pub use command::*;
pub use error::*;
pub use router::*;

use crate::error::AppError;
use crate::screen::{render, Phase, ScreenClient, ScreenEvent, ScreenState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;
use tracing::{debug, info};

/// Runs the interactive loop until `quit` or end of input.
///
/// While the initial load is outstanding the loading frame is drawn, followed
/// by the loaded screen once it settles. After that the screen is redrawn
/// after every command, plus once more while a submit is in flight.
pub async fn run<R, W>(
    client: &ScreenClient,
    input: R,
    mut output: W,
    currency: &str,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut updates = client.subscribe();

    let current = updates.borrow_and_update().clone();
    if current.phase == Phase::Loading {
        output.write_all(render(&current, currency).as_bytes()).await?;
        output.flush().await?;
    }
    let state = client.snapshot().await?;
    output.write_all(render(&state, currency).as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse(&line) {
            Ok(Command::Screen(event)) => {
                debug!(?event, "Dispatching");
                let state = dispatch(client, &mut updates, event, &mut output, currency).await?;
                output.write_all(render(&state, currency).as_bytes()).await?;
            }
            Ok(Command::Help) => {
                output.write_all(HELP.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                output.write_all(format!("{}\n", e).as_bytes()).await?;
            }
        }
    }

    info!("Shell finished");
    output.flush().await?;
    Ok(())
}

/// Sends `event` and waits for its reply, drawing any in-flight submit frame
/// the actor publishes meanwhile.
async fn dispatch<W>(
    client: &ScreenClient,
    updates: &mut watch::Receiver<ScreenState>,
    event: ScreenEvent,
    output: &mut W,
    currency: &str,
) -> Result<ScreenState, AppError>
where
    W: AsyncWrite + Unpin,
{
    let reply = client.send(event);
    tokio::pin!(reply);

    loop {
        tokio::select! {
            state = &mut reply => return Ok(state?),
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                if state.submitting {
                    output.write_all(render(&state, currency).as_bytes()).await?;
                    output.flush().await?;
                }
            }
        }
    }
}
