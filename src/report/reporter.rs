//! Portuguese console reporter for a census run.
//!
//! All user-facing lines go through [`Reporter`], which writes to any
//! [`Write`] sink (stdout in the binary, a `Vec<u8>` in tests). Color is
//! applied per line kind and can be switched off entirely.

use std::io::{self, Write};
use std::time::Duration;

use owo_colors::OwoColorize;

use super::format::{format_number, format_seconds};
use crate::aggregate::{ABOVE_THRESHOLD_XP, AggregationState, PageTally};
use crate::fetch::FetchError;

/// Line color by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    /// Page fetched and folded.
    Partial,
    /// Grand totals.
    Total,
    /// Per-range breakdown.
    Breakdown,
}

/// Writes progress and summary lines.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter; `color` enables ANSI colors.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Consumes the reporter and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Announces the start of a run.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn start(&mut self) -> io::Result<()> {
        self.line(Tone::Plain, "Iniciando a coleta de dados do leaderboard...")
    }

    /// Announces the record window about to be requested.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn page_start(&mut self, offset: u64, page_size: u64) -> io::Result<()> {
        let last = offset.saturating_add(page_size.saturating_sub(1));
        self.line(
            Tone::Plain,
            &format!(
                "Buscando registros {} a {}...",
                format_number(offset),
                format_number(last)
            ),
        )
    }

    /// Reports one failed attempt for a page.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn attempt_failed(&mut self, offset: u64, error: &FetchError) -> io::Result<()> {
        self.line(
            Tone::Plain,
            &format!("Erro ao buscar offset {}: {error}", format_number(offset)),
        )
    }

    /// Reports the pause before the next attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn retry_scheduled(&mut self, delay: Duration) -> io::Result<()> {
        self.line(
            Tone::Plain,
            &format!("Tentando novamente em {} segundos...", format_seconds(delay)),
        )
    }

    /// Reports that a page was given up after `attempts` tries.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn page_abandoned(&mut self, offset: u64, attempts: u32) -> io::Result<()> {
        self.line(
            Tone::Plain,
            &format!(
                "Falha ao buscar offset {} após {attempts} tentativas.",
                format_number(offset)
            ),
        )
    }

    /// Reports a page that contributed no entries.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn page_empty(&mut self, offset: u64) -> io::Result<()> {
        self.line(
            Tone::Plain,
            &format!(
                "Nenhum dado retornado para offset {}. Continuando para a próxima página.",
                format_number(offset)
            ),
        )
    }

    /// Reports what a non-empty page added.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn page_partial(&mut self, offset: u64, tally: PageTally) -> io::Result<()> {
        let last = offset.saturating_add(tally.entries.saturating_sub(1));
        self.line(
            Tone::Partial,
            &format!(
                "XP parcial para registros {} a {}: {}",
                format_number(offset),
                format_number(last),
                format_number(tally.xp)
            ),
        )
    }

    /// Prints the final totals and the per-range breakdown.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    pub fn summary(&mut self, total_records: u64, state: &AggregationState) -> io::Result<()> {
        writeln!(self.out)?;
        self.line(
            Tone::Total,
            &format!(
                "Total final de XP para {} carteiras: {}",
                format_number(total_records),
                format_number(state.total_xp())
            ),
        )?;
        self.line(
            Tone::Total,
            &format!(
                "Total de XP para carteiras com mais de {} pontos: {}",
                format_number(ABOVE_THRESHOLD_XP),
                format_number(state.above_threshold_xp())
            ),
        )?;
        writeln!(self.out)?;
        self.line(Tone::Plain, "Distribuição de carteiras por faixa de XP:")?;
        for (range, count) in state.range_counts().iter() {
            self.line(
                Tone::Breakdown,
                &format!("{range}: {} carteiras", format_number(count)),
            )?;
        }
        self.out.flush()
    }

    fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if !self.color {
            return writeln!(self.out, "{text}");
        }
        match tone {
            Tone::Plain => writeln!(self.out, "{text}"),
            Tone::Partial => writeln!(self.out, "{}", text.green()),
            Tone::Total => writeln!(self.out, "{}", text.yellow()),
            Tone::Breakdown => writeln!(self.out, "{}", text.cyan()),
        }
    }
}
