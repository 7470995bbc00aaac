#![forbid(unsafe_code)]

use crate::engine::ScanEngine;
use crate::error::Error;
use crate::exclusion::ExclusionPolicy;
use crate::invoker::{self, RawInvoker};
use async_trait::async_trait;
use config::Config;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Stable identity a check exposes to whatever runs and renders it.
#[derive(Debug, Clone, Copy)]
pub struct CheckMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    /// Checks that poke the kernel need a disposable execution context.
    pub side_effects: bool,
}

/// Tabular check output: a header row, data rows, and an optional
/// free-text comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub comment: Option<String>,
}

/// Run-a-check contract: produce a table plus optional comment, or fail.
#[async_trait]
pub trait Check: Send + Sync {
    fn meta(&self) -> &CheckMeta;
    async fn run(&self) -> Result<Table, Error>;
}

pub const SYSCALL_CHECK_META: CheckMeta = CheckMeta {
    name: "syscalls",
    aliases: &["syscall", "sys"],
    description: "Scans the syscall table to detect which syscalls are blocked and which are allowed.",
    side_effects: true,
};

/// The syscall-availability check.
pub struct SyscallCheck {
    engine: ScanEngine,
}

impl SyscallCheck {
    /// Scan the running kernel with the curated exclusion set.
    pub fn new(config: &Config) -> Self {
        Self::with_invoker(
            invoker::native(),
            ExclusionPolicy::baseline(),
            config.probe.timeout,
        )
    }

    /// Fully injected variant for tests and embedders.
    pub fn with_invoker(
        invoker: Arc<dyn RawInvoker>,
        exclusions: ExclusionPolicy,
        timeout: std::time::Duration,
    ) -> Self {
        Self {
            engine: ScanEngine::new(invoker, exclusions, timeout),
        }
    }
}

#[async_trait]
impl Check for SyscallCheck {
    fn meta(&self) -> &CheckMeta {
        &SYSCALL_CHECK_META
    }

    async fn run(&self) -> Result<Table, Error> {
        let report = self.engine.scan().await?;
        Ok(Table {
            headers: vec!["blocked".to_owned(), "allowed".to_owned()],
            rows: vec![vec![join(&report.blocked), join(&report.allowed)]],
            comment: Some(report.comment()),
        })
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
