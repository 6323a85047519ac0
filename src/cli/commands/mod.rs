//! CLI command implementations
//!
//! Commands print their result as JSON on stdout and report failures on
//! stderr, returning the process exit code.

pub mod lookup;
pub mod map;
pub mod resolve;
pub mod validate;

use super::{exit_code, EXIT_OK};
use crate::domain::{ConciergeError, Result};
use serde::Serialize;

/// Print a successful result as pretty JSON, or report the error
fn report<T: Serialize>(outcome: Result<T>) -> anyhow::Result<i32> {
    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(EXIT_OK)
        }
        Err(e) => Ok(report_error(&e)),
    }
}

fn report_error(error: &ConciergeError) -> i32 {
    let code = exit_code(error);
    if error.is_not_found() {
        tracing::info!(error = %error, "No match");
    } else {
        crate::log_error_with_context!(error, "Command failed");
    }
    eprintln!("Error: {error}");
    code
}
