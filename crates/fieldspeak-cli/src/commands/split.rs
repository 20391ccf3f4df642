//! Split command

use anyhow::Result;
use clap::Args;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::Write;

/// Arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Identifiers to split (e.g. "OldPassword", "VisitorID")
    #[arg(required = true)]
    pub identifiers: Vec<OsString>,
}

/// Print one phrase per identifier. Arguments that are not valid UTF-8 are
/// echoed unchanged.
pub fn split(args: SplitArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for identifier in &args.identifiers {
        out.write_all(&split_os(identifier))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(unix)]
fn split_os(identifier: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    fieldspeak::split_bytes(identifier.as_bytes())
}

#[cfg(not(unix))]
fn split_os(identifier: &OsStr) -> Cow<'_, [u8]> {
    match identifier.to_str() {
        Some(text) => Cow::Owned(fieldspeak::split(text).into_bytes()),
        None => Cow::Owned(identifier.to_string_lossy().into_owned().into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_utf8_argument() {
        assert_eq!(split_os(OsStr::new("OldPassword")).as_ref(), b"Old password");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_echoed() {
        use std::os::unix::ffi::OsStrExt;

        let raw = [0x4f, 0x6c, 0x64, 0xff, 0x50];
        assert_eq!(split_os(OsStr::from_bytes(&raw)).as_ref(), &raw[..]);
    }
}
