//! Unit documents the lecture page sends to the API.

use serde_json::{json, Value};

use crate::model::unit::{UnitDto, UnitKind};

/// Fields that belong to the stored copy a document was exported from.
const STORED_ONLY: [&str; 4] = ["_id", "createdAt", "updatedAt", "__v"];

pub fn free_text(course_id: i32, name: &str) -> Value {
    json!({
        "_course": course_id,
        "__t": UnitKind::FreeText.as_str(),
        "name": name.trim(),
        "content": { "markdown": "" },
    })
}

pub fn file_unit(course_id: i32, files: Vec<String>) -> Value {
    let name = match files.as_slice() {
        [single] => single.clone(),
        _ => format!("{} files", files.len()),
    };

    json!({
        "_course": course_id,
        "__t": UnitKind::File.as_str(),
        "name": name,
        "content": { "files": files },
    })
}

/// Turns an uploaded unit document into a new unit for `course_id`.
pub fn import(bytes: &[u8], course_id: i32) -> Result<Value, String> {
    let mut doc: Value =
        serde_json::from_slice(bytes).map_err(|e| format!("Not valid JSON: {}", e))?;

    let Some(obj) = doc.as_object_mut() else {
        return Err("The file must contain a single unit object".to_string());
    };

    for key in STORED_ONLY {
        obj.remove(key);
    }
    obj.insert("_course".to_string(), Value::from(course_id));

    Ok(doc)
}

/// Files referenced by the lecture's file and video units, first occurrence first.
pub fn lecture_files(units: &[UnitDto]) -> Vec<String> {
    let mut files: Vec<String> = Vec::new();

    for unit in units {
        if !matches!(unit.kind, UnitKind::File | UnitKind::Video) {
            continue;
        }

        let names = unit.content["files"].as_array().into_iter().flatten();
        for name in names.filter_map(Value::as_str) {
            if !files.iter().any(|f| f == name) {
                files.push(name.to_string());
            }
        }
    }

    files
}
