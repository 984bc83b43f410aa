use std::io::Write;
use std::sync::Mutex;

use serde_json::json;

use crate::app::Result;
use crate::pipeline::Outcome;

/// Receives the single outcome of a pipeline run.
pub trait Renderer {
    fn render(&self, outcome: &Outcome) -> Result<()>;
}

/// Plain-text output: title, felt count, perceived strength.
pub struct TerminalRenderer<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&self, outcome: &Outcome) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());

        match outcome {
            Ok(event) => {
                writeln!(out, "{}", event.title())?;
                writeln!(out, "{}", event.felt_message())?;
                writeln!(out, "Perceived strength: {}", event.perceived_strength())?;
            }
            Err(e) if e.is_no_events() => {
                writeln!(out, "No felt earthquakes in this feed.")?;
            }
            Err(e) => {
                writeln!(out, "No earthquake data available ({})", e)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// One JSON document per outcome.
pub struct JsonRenderer<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&self, outcome: &Outcome) -> Result<()> {
        let doc = match outcome {
            Ok(event) => json!({ "event": event }),
            Err(e) => json!({ "event": null, "reason": e.to_string() }),
        };

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        serde_json::to_writer(&mut *out, &doc)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
