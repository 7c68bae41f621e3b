use super::MmlEnvApp;
use crate::util::escape;
use arboard::Clipboard;
use maud::{PreEscaped, html};

impl MmlEnvApp {
    pub(crate) fn copy_tone_text(&mut self) {
        let text = self.tone_text();
        match copy_to_clipboard(&text) {
            Ok(()) => self.set_status("Tone MML copied."),
            Err(err) => self.set_status(format!("Copy failed: {err}")),
        }
    }

    pub(crate) fn copy_tone_html(&mut self) {
        let snippet = tone_html(&self.tone_text());
        match copy_to_clipboard(&snippet) {
            Ok(()) => self.set_status("Tone MML copied as HTML."),
            Err(err) => self.set_status(format!("Copy failed: {err}")),
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    Clipboard::new()?.set_text(text)
}

/// `<pre><code>…</code></pre>` with escaped text and `<br>` line breaks, or a
/// placeholder for an empty tone string.
pub(crate) fn tone_html(tone: &str) -> String {
    if tone.is_empty() {
        return "(none)".to_string();
    }
    let escaped = escape(tone).replace('\n', "<br>");
    html! {
        pre { code { (PreEscaped(escaped)) } }
    }
    .into_string()
}
