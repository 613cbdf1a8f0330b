use crate::error::DashboardError;
use crate::models::filter::{FilterSelection, FilterTab, NeighborhoodFilter};
use crate::models::map::{MapViewport, MAX_ZOOM, MIN_ZOOM};
use crate::models::view::{Layout, ViewState};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 2;

/// Typed view of the saved preferences, used to seed a new session.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveDashboardSettings {
    pub dark_mode: bool,
    pub default_layout: Layout,
    pub heatmap_enabled: bool,
    pub map_zoom: f64,
    pub default_tab: FilterTab,
    pub default_neighborhood: NeighborhoodFilter,
}

impl EffectiveDashboardSettings {
    pub fn initial_view(&self) -> ViewState {
        ViewState {
            dark_mode: self.dark_mode,
            layout: self.default_layout,
            map: MapViewport {
                heatmap: self.heatmap_enabled,
                ..MapViewport::default()
            }
            .with_zoom(self.map_zoom),
            ..ViewState::default()
        }
    }

    pub fn initial_selection(&self) -> FilterSelection {
        FilterSelection {
            query: String::new(),
            neighborhood: self.default_neighborhood.clone(),
            tab: self.default_tab,
        }
    }
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_settings(config_dir: String) -> Result<Value, String> {
    load_settings_from_disk(&config_dir)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn save_settings(config_dir: String, settings: Value) -> Result<Value, String> {
    save_settings_to_disk(&config_dir, settings)
}

pub fn load_effective_settings(
    config_dir: &str,
) -> Result<EffectiveDashboardSettings, DashboardError> {
    let settings = load_settings_from_disk(config_dir).map_err(DashboardError::Settings)?;
    Ok(effective_from_value(&settings))
}

fn effective_from_value(settings: &Value) -> EffectiveDashboardSettings {
    let default_layout = settings
        .get("defaultLayout")
        .and_then(Value::as_str)
        .and_then(Layout::parse)
        .unwrap_or_default();
    let default_tab = settings
        .get("defaultTab")
        .and_then(Value::as_str)
        .and_then(FilterTab::parse)
        .unwrap_or_default();
    let default_neighborhood = settings
        .get("defaultNeighborhood")
        .and_then(Value::as_str)
        .map(|name| NeighborhoodFilter::from(name.to_string()))
        .unwrap_or_default();

    EffectiveDashboardSettings {
        dark_mode: settings.get("darkMode").and_then(Value::as_bool).unwrap_or(false),
        default_layout,
        heatmap_enabled: settings
            .get("heatmapEnabled")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        map_zoom: settings
            .get("mapZoom")
            .and_then(Value::as_f64)
            .unwrap_or(1.0)
            .clamp(MIN_ZOOM, MAX_ZOOM),
        default_tab,
        default_neighborhood,
    }
}

pub fn load_settings_from_disk(config_dir: &str) -> Result<Value, String> {
    let path = settings_path(config_dir);
    ensure_settings_dir(config_dir)?;

    let original = if path.exists() {
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read settings.json: {e}"))?;
        serde_json::from_str::<Value>(&raw).unwrap_or_else(|e| {
            log::warn!("settings.json is not valid JSON, starting from defaults: {e}");
            json!({})
        })
    } else {
        json!({})
    };

    let migrated = migrate_settings(original.clone());
    if migrated != original || !path.exists() {
        log::info!("writing migrated settings to {}", path.display());
        write_settings_file(&path, &migrated)?;
    }

    Ok(migrated)
}

pub fn save_settings_to_disk(config_dir: &str, settings: Value) -> Result<Value, String> {
    let path = settings_path(config_dir);
    ensure_settings_dir(config_dir)?;

    let mut merged = load_settings_from_disk(config_dir).unwrap_or_else(|_| default_settings());
    merge_settings(&mut merged, &settings);

    let migrated = migrate_settings(merged);
    write_settings_file(&path, &migrated)?;
    Ok(migrated)
}

fn settings_path(config_dir: &str) -> PathBuf {
    Path::new(config_dir).join(".civicboard").join("settings.json")
}

fn ensure_settings_dir(config_dir: &str) -> Result<(), String> {
    let dir = Path::new(config_dir).join(".civicboard");
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create .civicboard directory: {e}"))
}

fn write_settings_file(path: &Path, settings: &Value) -> Result<(), String> {
    let raw = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, raw).map_err(|e| format!("Failed to write settings.json: {e}"))
}

fn migrate_settings(input: Value) -> Value {
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    let version = out
        .get("schema_version")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    if version < 1 {
        migrate_theme_to_dark_mode(&mut out);
    }

    if version < 2 {
        // V2 adds the map preferences.
        ensure_key(&mut out, "heatmapEnabled", json!(true));
        ensure_key(&mut out, "mapZoom", json!(1.0));
    }

    deep_merge_defaults(&mut out, &default_settings());
    sanitize_settings(&mut out);
    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    json!({
        "schema_version": SETTINGS_SCHEMA_VERSION,
        "darkMode": false,
        "defaultLayout": "split",
        "heatmapEnabled": true,
        "mapZoom": 1.0,
        "defaultTab": "all",
        "defaultNeighborhood": "all"
    })
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn ensure_key(target: &mut Value, key: &str, value: Value) {
    if let Some(obj) = target.as_object_mut() {
        obj.entry(key.to_string()).or_insert(value);
    }
}

fn merge_settings(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_settings(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

/// Legacy files stored `theme: "dark" | "light"`.
fn migrate_theme_to_dark_mode(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    if let Some(theme) = obj.remove("theme") {
        let dark = theme.as_str() == Some("dark");
        obj.entry("darkMode".to_string()).or_insert(json!(dark));
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    clamp_f64(obj, "mapZoom", MIN_ZOOM, MAX_ZOOM, 1.0);

    sanitize_enum(obj, "defaultLayout", &["split", "list", "map"], "split");
    sanitize_enum(
        obj,
        "defaultTab",
        &["all", "critical", "recurrent", "most-voted"],
        "all",
    );

    ensure_bool(obj, "darkMode", false);
    ensure_bool(obj, "heatmapEnabled", true);

    let neighborhood = obj
        .get("defaultNeighborhood")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("all")
        .to_string();
    obj.insert("defaultNeighborhood".to_string(), json!(neighborhood));
}

fn clamp_f64(map: &mut Map<String, Value>, key: &str, min: f64, max: f64, default: f64) {
    let raw = map.get(key).and_then(Value::as_f64).unwrap_or(default);
    map.insert(key.to_string(), json!(raw.clamp(min, max)));
}

fn sanitize_enum(map: &mut Map<String, Value>, key: &str, allowed: &[&str], default: &str) {
    let valid = map
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| allowed.contains(value))
        .unwrap_or(default);
    map.insert(key.to_string(), json!(valid));
}

fn ensure_bool(map: &mut Map<String, Value>, key: &str, default: bool) {
    let value = map.get(key).and_then(Value::as_bool).unwrap_or(default);
    map.insert(key.to_string(), json!(value));
}
