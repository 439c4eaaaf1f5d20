use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Error envelope counterpart of `JsonOut`: `{"ok": false, "error": {...}}`.
/// In text mode the message goes to stderr instead.
pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        let envelope = serde_json::json!({
            "ok": false,
            "error": { "code": code, "message": message }
        });
        println!("{}", envelope);
    } else {
        eprintln!("error: {}", message);
    }
}
