use dioxus::prelude::*;

use crate::notifications::{notify, notify_success, NoticeLevel, Notifications};

const COPIED_MESSAGE: &str = "Copiado al portapapeles";
const COPY_FAILED_MESSAGE: &str = "No se pudo copiar al portapapeles";

/// Script that writes `text` to the clipboard and reports back whether it worked.
fn copy_script(text: &str) -> Result<String, serde_json::Error> {
    let literal = serde_json::to_string(text)?;
    Ok(format!(
        r#"(async function() {{
            try {{
                await navigator.clipboard.writeText({literal});
                dioxus.send(true);
            }} catch (e) {{
                dioxus.send(false);
            }}
        }})();"#
    ))
}

/// Copy `text` to the system clipboard. The confirmation is only shown once
/// the browser accepted the write.
pub async fn copy_to_clipboard(mut notices: Signal<Notifications>, text: String) {
    let script = match copy_script(&text) {
        Ok(script) => script,
        Err(e) => {
            tracing::error!("could not copy to clipboard: {e}");
            notify(&mut notices, NoticeLevel::Error, COPY_FAILED_MESSAGE);
            return;
        }
    };

    let mut eval = document::eval(&script);
    match eval.recv::<bool>().await {
        Ok(true) => notify_success(&mut notices, COPIED_MESSAGE),
        outcome => {
            tracing::warn!("clipboard write rejected: {outcome:?}");
            notify(&mut notices, NoticeLevel::Error, COPY_FAILED_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_escapes_the_copied_text() {
        let script = copy_script("a\"b</script>").unwrap();
        assert!(script.contains(r#"writeText("a\"b</script>")"#));
        assert!(script.contains("dioxus.send(true)"));
        assert!(script.contains("dioxus.send(false)"));
    }
}
