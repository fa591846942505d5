//! Reporting of a deployment result to the operator.
//!
//! The result becomes a human-readable report and a process exit status. The
//! exit status is the only signal automation invoking the script can rely on.

use std::{
    error::Error,
    io::{self, Write},
};

use tracing::error;

use crate::{
    constants::{EXIT_FAILURE, EXIT_SUCCESS},
    types::DeploymentResult,
};

/// The exit status corresponding to a deployment result
pub fn exit_code<E>(res: &DeploymentResult<E>) -> u8 {
    match res {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

/// Write the report for a deployment result, returning the exit status.
///
/// A confirmed address is written to `out`. A failure is written to `err` in
/// full, along with every error in its source chain. The exit status depends
/// only on the result; a report that cannot be written is logged instead.
pub fn report<E: Error>(
    contract_name: &str,
    res: &DeploymentResult<E>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    if let Err(e) = write_report(contract_name, res, out, err) {
        error!("error writing {} deployment report: {}", contract_name, e);
    }

    exit_code(res)
}

/// Write the human-readable lines for a deployment result
fn write_report<E: Error>(
    contract_name: &str,
    res: &DeploymentResult<E>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match res {
        Ok(address) => {
            writeln!(out, "{} contract deployed to: {}", contract_name, address)?;
        }
        Err(e) => {
            error!("{} deployment failed: {}", contract_name, e);
            writeln!(err, "{} deployment failed: {}", contract_name, e)?;

            let mut source = e.source();
            while let Some(cause) = source {
                writeln!(err, "  caused by: {}", cause)?;
                source = cause.source();
            }
        }
    }

    Ok(())
}
