//! Startup guard tying the tool to its cargo alias.

/// Verifies the tool was launched through cargo.
///
/// Cargo exports the `CARGO` variable to every process it spawns, so an
/// absent or empty value means the binary was invoked directly. The check is
/// a pure verdict over that value; the caller decides how to fail.
///
/// # Errors
/// Returns the fatal startup message when the wrapper variable is missing.
pub fn check_invocation(cargo_env: Option<&str>) -> Result<(), String> {
    match cargo_env {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err("Please use cargo ('cargo snapshot') to generate snapshots!".to_owned()),
    }
}
