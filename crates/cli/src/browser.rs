// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Opening bugs in a web browser.

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const DEFAULT_COMMAND: &str = "xdg-open";
/// Wait after the first link so the browser can start up.
const FIRST_PAUSE: Duration = Duration::from_secs(5);
/// Wait between further tabs so they open in order.
const TAB_PAUSE: Duration = Duration::from_millis(1200);

/// Sink for links the user asked to open.
pub trait BrowserOpener {
    /// Opens each URL in order.
    fn open(&self, urls: &[String]) -> Result<()>;
}

/// Opens links with `$BROWSER`, falling back to `xdg-open`.
///
/// Each link is handed to a separate, detached process.
#[derive(Debug, Clone)]
pub struct SystemBrowser {
    command: String,
    first_pause: Duration,
    tab_pause: Duration,
}

impl SystemBrowser {
    pub fn new(command: impl Into<String>) -> Self {
        SystemBrowser {
            command: command.into(),
            first_pause: FIRST_PAUSE,
            tab_pause: TAB_PAUSE,
        }
    }

    pub fn from_env() -> Self {
        SystemBrowser::new(env::browser().unwrap_or_else(|| DEFAULT_COMMAND.to_string()))
    }

    /// Overrides the pauses between links (builder pattern).
    pub fn with_pauses(mut self, first: Duration, tab: Duration) -> Self {
        self.first_pause = first;
        self.tab_pause = tab;
        self
    }

    fn spawn(&self, url: &str) -> Result<()> {
        let mut words = self.command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| Error::Browser("empty browser command".to_string()))?;

        let child = Command::new(program)
            .args(words)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("failed to run '{}': {}", program, e)))?;

        // Not waited on; the browser outlives us.
        drop(child);
        Ok(())
    }
}

impl BrowserOpener for SystemBrowser {
    fn open(&self, urls: &[String]) -> Result<()> {
        for (i, url) in urls.iter().enumerate() {
            if i == 1 {
                thread::sleep(self.first_pause);
            } else if i > 1 {
                thread::sleep(self.tab_pause);
            }
            tracing::debug!("opening {}", url);
            self.spawn(url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
