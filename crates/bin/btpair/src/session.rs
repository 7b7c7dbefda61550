//! Interactive terminal session — the user side of the pairing page.
//!
//! Plays the part of the browser: picks a device from the selector, fills
//! the optional fields when the page shows them, and submits.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use btpair_app::ports::{PageRenderer, PairingBackend};
use btpair_app::services::page_controller::{PageController, SubmitOutcome};
use btpair_domain::device::DeviceKey;
use btpair_domain::form::FormField;
use btpair_domain::view::Region;

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read input")]
    Input(#[source] std::io::Error),
    #[error("failed to write prompt")]
    Output(#[source] std::io::Error),
}

/// Run one selection-and-submit round against an already loaded page.
///
/// Returns `None` when there was nothing to submit (no devices, or the
/// input ended before submission).
///
/// # Errors
///
/// Returns [`SessionError`] when reading input or writing prompts fails.
pub async fn run<B, R, I, W>(
    controller: &PageController<B, R>,
    input: &mut I,
    out: &mut W,
) -> Result<Option<SubmitOutcome>, SessionError>
where
    B: PairingBackend,
    R: PageRenderer,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let view = controller.view();
    if !view.is_visible(Region::BeforeSubmit) || view.options.is_empty() {
        return Ok(None);
    }

    let prompt = format!(
        "select device [1-{}, enter keeps current]: ",
        view.options.len()
    );
    let Some(answer) = ask(input, out, &prompt).await? else {
        return Ok(None);
    };
    if let Some(option) = answer
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| view.options.get(index))
    {
        controller.select_device(DeviceKey::new(option.value.clone()));
    } else if !answer.is_empty() {
        tracing::debug!(answer = %answer, "ignoring invalid selection");
    }

    let view = controller.view();
    for (region, field, prompt) in [
        (Region::ServiceGroup, FormField::Service, "service: "),
        (Region::ProtoportGroup, FormField::Protoport, "protocol:port: "),
    ] {
        if !view.is_visible(region) {
            continue;
        }
        let Some(value) = ask(input, out, prompt).await? else {
            return Ok(None);
        };
        controller.edit_field(field, value);
    }

    Ok(Some(controller.submit().await))
}

async fn ask<I, W>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, SessionError>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    out.write_all(prompt.as_bytes())
        .and_then(|()| out.flush())
        .map_err(SessionError::Output)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).await.map_err(SessionError::Input)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
