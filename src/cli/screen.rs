//! Clearing the terminal before a chart is printed.
//!
//! The strategy is a plain value: pick one with [`ClearScreen::detect`]
//! where it is needed and hand it to whoever draws.

use std::{
    io::{self, Write},
    process::Command,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScreen {
    /// `ESC[2J ESC[H`: erase display, cursor home.
    Ansi,
    /// Windows console: run `cmd /c cls`.
    Cls,
}

impl ClearScreen {
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(windows) { Self::Cls } else { Self::Ansi }
    }

    pub fn clear<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Ansi => {
                out.write_all(b"\x1b[2J\x1b[H")?;
                out.flush()
            }
            Self::Cls => {
                out.flush()?;
                let status = Command::new("cmd").args(["/c", "cls"]).status()?;
                if status.success() {
                    Ok(())
                } else {
                    Err(io::Error::other(format!("cls exited with {status}")))
                }
            }
        }
    }
}
