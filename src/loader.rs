use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LimitError;
use crate::types::Inventory;

/// Parse an inventory JSON document.
///
/// Every field is optional; missing lists are treated as empty. JSON errors
/// are mapped into `LimitError::InventoryFormat`.
///
/// Example:
/// ```rust
/// use hostlimit::load_inventory_str;
/// let inv = load_inventory_str(r#"{
///     "hosts": ["web01", "db01"],
///     "groups": [{"name": "web", "hosts": ["web01"]}]
/// }"#).unwrap();
/// assert_eq!(inv.hosts.len(), 2);
/// assert_eq!(inv.groups[0].name, "web");
/// ```
pub fn load_inventory_str(text: &str) -> Result<Inventory, LimitError> {
    let inventory: Inventory = serde_json::from_str(text)?;
    debug!(
        event = "Inventory",
        phase = "Loaded",
        hosts = inventory.hosts.len(),
        groups = inventory.groups.len()
    );
    Ok(inventory)
}

/// Read and parse an inventory JSON file.
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<Inventory, LimitError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| LimitError::InventoryRead(format!("{}: {e}", path.display())))?;
    load_inventory_str(&text)
}
