//! RPC method handler for the dlrenamer JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches method calls from the UI surfaces
//! (popup, options page, content overlay) to the settings engine, pattern
//! builder, and rename engine via the `App` struct.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::pattern_builder::PatternBuilderTrait;
use crate::services::rename_engine::RenameEngineTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::download::{DownloadEvent, RenameDecision};
use crate::types::pattern::{Placeholder, Separator};

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// `download.determine` is the one exception to the error contract: it always
/// answers, falling back to "keep the original name", because the host's
/// download cannot be left unresolved.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            // Keep the builder's token list in sync when the pattern changes under it.
            if key == "pattern" || key == "separator" {
                a.sync_builder();
            }
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.sync_builder();
            Ok(json!({"ok": true}))
        }

        // ─── Pattern builder ───
        "builder.placeholders" => {
            let arr: Vec<Value> = Placeholder::ALL
                .iter()
                .filter(|p| **p != Placeholder::Ext)
                .map(|p| json!(p.name()))
                .collect();
            Ok(json!({"placeholders": arr}))
        }
        "builder.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let arr: Vec<Value> = a
                .pattern_builder
                .tokens()
                .iter()
                .map(|t| json!(t.name()))
                .collect();
            Ok(json!({"tokens": arr}))
        }
        "builder.insert" => {
            let name = params.get("token").and_then(|v| v.as_str()).ok_or("missing token")?;
            let token =
                Placeholder::from_name(name).ok_or_else(|| format!("unknown placeholder: {}", name))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let index = params
                .get("index")
                .and_then(|v| v.as_u64())
                .map(|i| i as usize)
                .unwrap_or_else(|| a.pattern_builder.tokens().len());
            a.pattern_builder.insert_token(token, index).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "builder.remove" => {
            let index = params.get("index").and_then(|v| v.as_u64()).ok_or("missing index")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a
                .pattern_builder
                .remove_token(index as usize)
                .map_err(|e| e.to_string())?;
            Ok(json!({"token": removed.name()}))
        }
        "builder.move" => {
            let from = params.get("from").and_then(|v| v.as_u64()).ok_or("missing from")?;
            let to = params.get("to").and_then(|v| v.as_u64()).ok_or("missing to")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.pattern_builder
                .move_token(from as usize, to as usize)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "builder.save" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let separator = match params.get("separator").and_then(|v| v.as_str()) {
                Some(s) => Separator::parse(s).ok_or_else(|| format!("unknown separator: {:?}", s))?,
                None => Separator::parse(&a.settings_engine.get_settings().separator)
                    .unwrap_or(Separator::Underscore),
            };
            let spec = a.pattern_builder.to_pattern(separator);
            let mut settings = a.settings_engine.get_settings().clone();
            settings.pattern = spec.template();
            settings.separator = separator.as_str().to_string();
            a.settings_engine.replace(settings).map_err(|e| e.to_string())?;
            Ok(json!({"pattern": spec.template(), "separator": separator.as_str()}))
        }

        // ─── Renaming ───
        "rename.preview" => {
            let filename = params
                .get("filename")
                .and_then(|v| v.as_str())
                .ok_or("missing filename")?;
            let url = params.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let event = DownloadEvent::new(filename, url);
            let decision = a
                .rename_engine
                .decide(a.settings_engine.get_settings(), &event);
            let renamed = matches!(decision, RenameDecision::Rename(_));
            Ok(json!({
                "filename": decision.resolved(filename),
                "renamed": renamed
            }))
        }
        "download.determine" => {
            // Host interception callback: answer exactly once and never fail
            // the download. Missing params and lock poisoning all degrade to
            // "keep the original name".
            let filename = params.get("filename").and_then(|v| v.as_str()).unwrap_or("");
            let url = params.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let a = match app.lock() {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("download.determine kept original name: {}", e);
                    return Ok(json!({"filename": Value::Null}));
                }
            };
            let event = DownloadEvent::new(filename, url);
            let mut response = json!({"filename": Value::Null});
            a.process_download(&event, |decision| {
                if let RenameDecision::Rename(name) = decision {
                    response = json!({"filename": name});
                }
            });
            Ok(response)
        }

        // ─── Cross-surface messaging ───
        "ui.open_options" => {
            // Fire-and-forget relay; the UI shell navigates to the options surface.
            Ok(json!({"action": "openOptionsPage"}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
