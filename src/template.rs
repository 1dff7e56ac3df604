// src/template.rs
//
// The settings template: JSON keyed file → "sections" → section →
// "settings" → entry. Loaded once, merged in place, dumped back out.
//
// Entries already in the template are kept as opaque JSON: the live
// template carries entry types this tool never emits (e.g. "array"),
// so a merge may only rewrite the description member of an existing
// entry. The typed structs below exist to build *new* entries.

use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Semantic kind attached to entries this tool creates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Bool,
    Float,
    Int,
    String,
}

/// A typed default. `Text("")` means "no known default".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl DefaultValue {
    pub fn none() -> Self {
        DefaultValue::Text(s!())
    }
}

/// Shape of a freshly created entry. Field order is the on-disk order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    #[serde(rename = "type")]
    pub kind: SettingKind,
    pub label: String,
    pub default: DefaultValue,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettingsTemplate {
    root: Value,
}

impl SettingsTemplate {
    pub fn from_str(text: &str) -> Result<Self, Box<dyn Error>> {
        let root: Value = serde_json::from_str(text)?;
        if !root.is_object() {
            return Err("settings template root must be a JSON object".into());
        }
        Ok(Self { root })
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("read {}: {e}", path.display()))?;
        Self::from_str(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(path, self.to_json_string()?)
            .map_err(|e| format!("write {}: {e}", path.display()))?;
        Ok(())
    }

    /// Pretty JSON: 2-space indent, non-ASCII kept literal, one
    /// trailing newline. Key order is load order (plus insertions).
    pub fn to_json_string(&self) -> Result<String, Box<dyn Error>> {
        let mut out = serde_json::to_string_pretty(&self.root)?;
        out.push('\n');
        Ok(out)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Refresh the description of a declared key. Returns false when
    /// the file, section or key is absent — nothing else is touched.
    pub fn update_description(
        &mut self,
        file: &str,
        section: &str,
        key: &str,
        description: &str,
    ) -> bool {
        let Some(settings) = self.settings_mut(file, section, false) else {
            return false;
        };
        let Some(entry) = settings.get_mut(key).and_then(Value::as_object_mut) else {
            return false;
        };
        entry.insert(s!("description"), Value::String(s!(description)));
        true
    }

    /// Insert a freshly inferred entry, creating the file/section
    /// scaffolding on the way down.
    pub fn insert_entry(
        &mut self,
        file: &str,
        section: &str,
        key: &str,
        entry: &SettingEntry,
    ) -> Result<(), Box<dyn Error>> {
        let settings = self
            .settings_mut(file, section, true)
            .ok_or("template structure is not an object tree")?;
        settings.insert(s!(key), serde_json::to_value(entry)?);
        Ok(())
    }

    /// Every key declared for `file`, across all of its sections.
    pub fn declared_keys(&self, file: &str) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        let sections = self
            .root
            .get(file)
            .and_then(|f| f.get("sections"))
            .and_then(Value::as_object);
        if let Some(sections) = sections {
            for section in sections.values() {
                if let Some(settings) = section.get("settings").and_then(Value::as_object) {
                    keys.extend(settings.keys().cloned());
                }
            }
        }
        keys
    }

    /// Walk down to the settings map for `file`/`section`. With
    /// `create`, missing levels are built empty; without, any absence
    /// yields None.
    fn settings_mut(
        &mut self,
        file: &str,
        section: &str,
        create: bool,
    ) -> Option<&mut Map<String, Value>> {
        let root = self.root.as_object_mut()?;
        let file_v = if create {
            root.entry(file).or_insert_with(|| json!({ "sections": {} }))
        } else {
            root.get_mut(file)?
        };
        let file_obj = file_v.as_object_mut()?;
        let sections_v = if create {
            file_obj.entry("sections").or_insert_with(|| json!({}))
        } else {
            file_obj.get_mut("sections")?
        };
        let sections = sections_v.as_object_mut()?;
        let section_v = if create {
            sections.entry(section).or_insert_with(|| json!({ "settings": {} }))
        } else {
            sections.get_mut(section)?
        };
        let section_obj = section_v.as_object_mut()?;
        let settings_v = if create {
            section_obj.entry("settings").or_insert_with(|| json!({}))
        } else {
            section_obj.get_mut("settings")?
        };
        settings_v.as_object_mut()
    }
}
