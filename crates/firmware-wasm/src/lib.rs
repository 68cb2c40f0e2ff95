//! WASM bindings for firmware archive inspection and hub-name encoding.
//!
//! Every export takes the archive bytes (or a metadata document) by value
//! from the JS side and returns plain JS values; no state is kept between
//! calls. Errors cross the boundary as strings.

use pybricks_firmware::{FirmwareMetadata, FirmwareReader, HubType};
use wasm_bindgen::prelude::*;

fn load_reader(zip_data: &[u8]) -> Result<FirmwareReader<'_>, String> {
    FirmwareReader::load(zip_data).map_err(|e| e.to_string())
}

fn firmware_metadata_internal(zip_data: &[u8]) -> Result<FirmwareMetadata, String> {
    let mut reader = load_reader(zip_data)?;
    reader.read_metadata().map_err(|e| e.to_string())
}

fn firmware_base_internal(zip_data: &[u8]) -> Result<Vec<u8>, String> {
    let mut reader = load_reader(zip_data)?;
    reader.read_firmware_base().map_err(|e| e.to_string())
}

fn firmware_main_py_internal(zip_data: &[u8]) -> Result<Option<String>, String> {
    let mut reader = load_reader(zip_data)?;
    reader.read_main_py().map_err(|e| e.to_string())
}

fn firmware_readme_oss_internal(zip_data: &[u8]) -> Result<String, String> {
    let mut reader = load_reader(zip_data)?;
    reader.read_readme_oss().map_err(|e| e.to_string())
}

fn encode_hub_name_internal(name: &str, metadata_json: &str) -> Result<Vec<u8>, String> {
    let metadata = FirmwareMetadata::parse(metadata_json).map_err(|e| e.to_string())?;
    pybricks_firmware::encode_hub_name(name, &metadata).map_err(|e| e.to_string())
}

fn hub_zip_file_name_internal(device_id: u8) -> Result<String, String> {
    let hub = HubType::try_from(device_id).map_err(|e| e.to_string())?;
    Ok(hub.zip_file_name().to_string())
}

/// Reads and parses `firmware.metadata.json`, returned as a JS object with
/// the document's own field names.
#[wasm_bindgen]
pub fn firmware_metadata(zip_data: &[u8]) -> Result<JsValue, JsValue> {
    let metadata = firmware_metadata_internal(zip_data).map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&metadata).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Reads the raw firmware image, `firmware-base.bin`.
#[wasm_bindgen]
pub fn firmware_base(zip_data: &[u8]) -> Result<Vec<u8>, JsValue> {
    firmware_base_internal(zip_data).map_err(|e| JsValue::from_str(&e))
}

/// Reads the default user program, `main.py`, or `undefined` when the
/// archive ships without one.
#[wasm_bindgen]
pub fn firmware_main_py(zip_data: &[u8]) -> Result<Option<String>, JsValue> {
    firmware_main_py_internal(zip_data).map_err(|e| JsValue::from_str(&e))
}

/// Reads the license and attribution text, `ReadMe_OSS.txt`.
#[wasm_bindgen]
pub fn firmware_readme_oss(zip_data: &[u8]) -> Result<String, JsValue> {
    firmware_readme_oss_internal(zip_data).map_err(|e| JsValue::from_str(&e))
}

/// Encodes a hub display name for the slot `metadata_json` declares.
#[wasm_bindgen]
pub fn encode_hub_name(name: &str, metadata_json: &str) -> Result<Vec<u8>, JsValue> {
    encode_hub_name_internal(name, metadata_json).map_err(|e| JsValue::from_str(&e))
}

/// Distribution file name for a hub's archive, from its `device-id`.
#[wasm_bindgen]
pub fn hub_zip_file_name(device_id: u8) -> Result<String, JsValue> {
    hub_zip_file_name_internal(device_id).map_err(|e| JsValue::from_str(&e))
}
