//! Shell-first HTML streaming.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    #[error("shell must be sent before sections")]
    ShellNotSent,
    #[error("shell already sent")]
    ShellAlreadySent,
    #[error("page already finished")]
    Finished,
    #[error("write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhaseState {
    Initial,
    ShellSent,
    Finished,
}

/// Writes a page as shell, sections, closing; in that order.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's outgoing body.
pub struct PageStream<S> {
    inner: S,
    state: PhaseState,
    sections_sent: Vec<String>,
}

impl<S> PageStream<S>
where
    S: Sink<Vec<u8>> + Unpin,
    S::Error: Display,
{
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            state: PhaseState::Initial,
            sections_sent: Vec::new(),
        }
    }

    /// Send the document opening. Must come first.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        if self.state != PhaseState::Initial {
            return Err(StreamError::ShellAlreadySent);
        }
        self.write(html).await?;
        self.state = PhaseState::ShellSent;
        Ok(())
    }

    /// Send a named section after the shell.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        match self.state {
            PhaseState::Initial => return Err(StreamError::ShellNotSent),
            PhaseState::Finished => return Err(StreamError::Finished),
            PhaseState::ShellSent => {}
        }
        self.write(html).await?;
        self.sections_sent.push(name.to_string());
        Ok(())
    }

    /// Send the document closing and flush.
    pub async fn finish(&mut self, closing: &str) -> Result<(), StreamError> {
        match self.state {
            PhaseState::Initial => return Err(StreamError::ShellNotSent),
            PhaseState::Finished => return Err(StreamError::Finished),
            PhaseState::ShellSent => {}
        }
        self.write(closing).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| StreamError::Write(e.to_string()))?;
        self.state = PhaseState::Finished;
        Ok(())
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    async fn write(&mut self, html: &str) -> Result<(), StreamError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| StreamError::Write(e.to_string()))
    }
}
