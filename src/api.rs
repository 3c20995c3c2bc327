use crate::error;
use crate::interop::arr_f64;
use js_sys::{Float64Array, Function};
use wasm_bindgen::prelude::*;
use wavepath::{PathData, PathOptions};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn normalized_path(heights: &[f64], svg_width: f64, svg_height: f64, closed: Option<bool>) -> PathData {
    let opts = PathOptions { width: svg_width, height: svg_height, closed: closed.unwrap_or(false), ..PathOptions::default() };
    wavepath::generate_path_with(heights, &opts)
}

// Path generation

#[wasm_bindgen(js_name = generateNormalizedPath)]
pub fn generate_normalized_path(heights: &[f64], svg_width: f64, svg_height: f64, closed: Option<bool>) -> String {
    wavepath::generate_normalized_path(heights, svg_width, svg_height, closed.unwrap_or(false))
}

#[wasm_bindgen(js_name = generateNormalizedPathRes)]
pub fn generate_normalized_path_res(heights: &[f64], svg_width: f64, svg_height: f64, closed: Option<bool>) -> JsValue {
    if !svg_width.is_finite() {
        return error::non_finite("svgWidth");
    }
    if !svg_height.is_finite() {
        return error::non_finite("svgHeight");
    }
    match wavepath::generate_normalized_path_strict(heights, svg_width, svg_height, closed.unwrap_or(false)) {
        Ok(d) => error::ok(JsValue::from_str(&d)),
        Err(e) => error::from_core(e),
    }
}

/// `options` is `{ width, height, closed, range: { min, max } }`; missing
/// fields take their defaults and `undefined` means all defaults.
#[wasm_bindgen(js_name = generatePathWith)]
pub fn generate_path_with(heights: &[f64], options: JsValue) -> JsValue {
    let opts: PathOptions = if options.is_undefined() || options.is_null() {
        PathOptions::default()
    } else {
        match serde_wasm_bindgen::from_value(options) {
            Ok(o) => o,
            Err(e) => return error::invalid_options(e.to_string()),
        }
    };
    match wavepath::generate_path_with_strict(heights, &opts) {
        Ok(p) => error::ok(JsValue::from_str(&p.to_svg_d())),
        Err(e) => error::from_core(e),
    }
}

#[wasm_bindgen(js_name = generatePathFromJson)]
pub fn generate_path_from_json(heights: &[f64], options_json: &str) -> JsValue {
    let v: serde_json::Value = match serde_json::from_str(options_json) {
        Ok(v) => v,
        Err(e) => return error::err("json_parse", e.to_string(), None),
    };
    let opts = match wavepath::options_from_json(v) {
        Ok(o) => o,
        Err(e) => return error::from_core(e),
    };
    match wavepath::generate_path_with_strict(heights, &opts) {
        Ok(p) => error::ok(JsValue::from_str(&p.to_svg_d())),
        Err(e) => error::from_core(e),
    }
}

/// Command objects (`{ cmd: 'MoveTo', x, y }`, ...) for the normalized path.
#[wasm_bindgen(js_name = pathCommands)]
pub fn path_commands(heights: &[f64], svg_width: f64, svg_height: f64, closed: Option<bool>) -> JsValue {
    let p = normalized_path(heights, svg_width, svg_height, closed);
    serde_wasm_bindgen::to_value(&p.commands).unwrap_or(JsValue::NULL)
}

/// Versioned JSON document with the `d` string and command list.
#[wasm_bindgen(js_name = pathJson)]
pub fn path_json(heights: &[f64], svg_width: f64, svg_height: f64, closed: Option<bool>) -> String {
    let p = normalized_path(heights, svg_width, svg_height, closed);
    serde_json::to_string(&wavepath::to_json(&p)).unwrap_or_default()
}

#[wasm_bindgen(js_name = normalizeArray)]
pub fn normalize_array(arr: &[f64], min_range: f64, max_range: f64) -> Float64Array {
    arr_f64(&wavepath::algorithms::normalize::normalize(arr, min_range, max_range))
}

// Simplification

#[wasm_bindgen(js_name = simplifyData)]
pub fn simplify_data(points: &[f64], epsilon: f64) -> Float64Array {
    arr_f64(&wavepath::simplify_data(points, epsilon))
}

#[wasm_bindgen(js_name = simplifyDataRes)]
pub fn simplify_data_res(points: &[f64], epsilon: f64) -> JsValue {
    if epsilon.is_nan() {
        return error::non_finite("epsilon");
    }
    match wavepath::simplify_data_strict(points, epsilon) {
        Ok(out) => error::ok(arr_f64(&out).into()),
        Err(e) => error::from_core(e),
    }
}

// Batches

// (completed calls, first exception)
type BatchState = (u32, Option<JsValue>);

fn call_batch(callback: &Function, batch: &[f64], state: &mut BatchState) {
    if state.1.is_some() { return; }
    match callback.call1(&JsValue::NULL, &arr_f64(batch).into()) {
        Ok(_) => state.0 += 1,
        Err(e) => state.1 = Some(e),
    }
}

// JS numbers: fractions truncate, anything past usize saturates
fn batch_len(batch_size: f64) -> Option<usize> {
    if batch_size >= 1.0 { Some(batch_size as usize) } else { None }
}

/// Calls `callback` with successive `Float64Array` slices of `arr`. Stops at
/// the first exception, which is reported to the console. Returns the number
/// of completed calls; a batch size below 1 (or NaN) makes none.
#[wasm_bindgen(js_name = processArrayInBatches)]
pub fn process_array_in_batches(arr: &[f64], batch_size: f64, callback: &Function) -> u32 {
    let Some(size) = batch_len(batch_size) else {
        log::warn!("processArrayInBatches: batch size {} < 1, nothing to do", batch_size);
        return 0;
    };
    let mut state: BatchState = (0, None);
    wavepath::process_array_in_batches(arr, size, |b| call_batch(callback, b, &mut state));
    let (done, thrown) = state;
    if let Some(e) = thrown {
        web_sys::console::error_2(&JsValue::from_str("processArrayInBatches: callback threw"), &e);
    }
    done
}

#[wasm_bindgen(js_name = processArrayInBatchesRes)]
pub fn process_array_in_batches_res(arr: &[f64], batch_size: f64, callback: &Function) -> JsValue {
    let Some(size) = batch_len(batch_size) else {
        if batch_size.is_nan() {
            return error::non_finite("batchSize");
        }
        return error::out_of_range("batchSize", 1.0, f64::INFINITY, batch_size);
    };
    let mut state: BatchState = (0, None);
    let res = wavepath::process_array_in_batches_strict(arr, size, |b| call_batch(callback, b, &mut state));
    let (done, thrown) = state;
    match (res, thrown) {
        (Err(e), _) => error::from_core(e),
        (Ok(_), Some(e)) => error::callback_failed(done, e),
        (Ok(n), None) => error::ok(JsValue::from_f64(n as f64)),
    }
}
