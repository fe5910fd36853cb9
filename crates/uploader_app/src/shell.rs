//! Line-driven stand-in for the upload page: one file path per line.

use std::io::{self, BufRead, Write};
use std::path::Path;

use uploader_core::{update, Msg, Phase, UploadState, UploadViewModel};
use uploader_engine::ExtractSettings;

use crate::effects::EffectRunner;
use crate::file_select;

pub fn run() -> io::Result<()> {
    let runner = EffectRunner::new(ExtractSettings::default());
    let mut state = UploadState::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Document Information Extractor")?;
    writeln!(out, "Enter the path of a PDF to upload, one per line.")?;
    out.flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        let msg = match file_select::load(Path::new(path)) {
            Ok(file) => Msg::FileSelected(file),
            Err(err) => {
                writeln!(out, "Could not read {path}: {err}")?;
                continue;
            }
        };
        dispatch(&mut state, msg, &runner, &mut out)?;

        // The file input stays disabled while a request is outstanding, so
        // block for the completion instead of reading the next line.
        while state.is_busy() {
            let Some(msg) = runner.recv_event() else { break };
            dispatch(&mut state, msg, &runner, &mut out)?;
        }
    }

    Ok(())
}

fn dispatch(
    state: &mut UploadState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut impl Write,
) -> io::Result<()> {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.enqueue(effects);
    let redraw = next.consume_dirty();
    let view = next.view();
    *state = next;

    if redraw {
        render(&view, out)?;
    }
    Ok(())
}

fn render(view: &UploadViewModel, out: &mut impl Write) -> io::Result<()> {
    match view.phase {
        Phase::Idle => {}
        Phase::Loading => writeln!(out, "Processing PDF...")?,
        Phase::Error => writeln!(out, "Error: {}", view.error_message)?,
        Phase::Success => {
            writeln!(out, "Name:    {}", view.fields.name)?;
            writeln!(out, "Phone:   {}", view.fields.phone)?;
            writeln!(out, "Address: {}", view.fields.address)?;
        }
    }
    out.flush()
}
