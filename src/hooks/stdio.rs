//! Host protocol plumbing.
//!
//! One JSON event in, at most one JSON record out. Generic over
//! `Read`/`Write` so the binary and the tests share the same code.

use super::registry::HookRegistry;
use super::types::{HookEvent, HookResult};
use super::{HookError, HookIoResult};
use std::io::{Read, Write};
use tracing::{debug, error};

/// Read and parse one event from the host.
///
/// # Errors
///
/// Returns `HookError::ReadInput` if the reader fails and
/// `HookError::ParseEvent` if the payload is not an event object.
pub fn read_event<R: Read>(mut reader: R) -> HookIoResult<HookEvent> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(HookError::ReadInput)?;

    serde_json::from_str(&raw).map_err(HookError::ParseEvent)
}

/// Write the decision back to the host. Pass-through writes nothing.
///
/// The record is fully serialized before the first byte is written.
///
/// # Errors
///
/// Returns `HookError::SerializeResponse` or `HookError::WriteOutput`.
pub fn write_decision<W: Write>(mut writer: W, decision: HookResult) -> HookIoResult<()> {
    let Some(response) = decision.into_response() else {
        return Ok(());
    };

    let mut encoded = serde_json::to_vec(&response).map_err(HookError::SerializeResponse)?;
    encoded.push(b'\n');

    writer.write_all(&encoded).map_err(HookError::WriteOutput)?;
    writer.flush().map_err(HookError::WriteOutput)
}

/// Run one full exchange: read an event, decide, write the answer.
///
/// Unreadable or malformed input is treated as pass-through. Only output
/// failures are reported, and only for logging; the host must still see
/// a clean exit.
pub fn run_exchange<R: Read, W: Write>(
    registry: &HookRegistry,
    reader: R,
    writer: W,
) -> HookResult {
    let decision = match read_event(reader) {
        Ok(event) => registry.execute(&event),
        Err(err) => {
            debug!(error = %err, "Ignoring unusable hook input");
            HookResult::PassThrough
        }
    };

    if let Err(err) = write_decision(writer, decision.clone()) {
        error!(error = %err, "Failed to write hook response");
    }

    decision
}
