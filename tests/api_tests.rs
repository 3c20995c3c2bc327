use js_sys::{Array, Float64Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use wavepath_wasm::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(v: &JsValue, k: &str) -> JsValue { Reflect::get(v, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED) }
fn is_ok(v: &JsValue) -> bool { get(v, "ok").as_bool().unwrap_or(false) }

#[wasm_bindgen_test]
fn normalized_path_basics() {
    assert_eq!(generate_normalized_path(&[], 100.0, 100.0, None), "");
    assert_eq!(generate_normalized_path(&[7.0], 100.0, 100.0, Some(true)), "");
    let d = generate_normalized_path(&[1.0, 3.0, 2.0], 100.0, 50.0, Some(true));
    assert!(d.starts_with("M0 "));
    assert_eq!(d.matches('C').count(), 2);
    assert!(d.ends_with(" L100 50 L0 50 Z"));
}

#[wasm_bindgen_test]
fn res_variant_wraps_string() {
    let r = generate_normalized_path_res(&[1.0, 3.0], 10.0, 10.0, None);
    assert!(is_ok(&r));
    assert_eq!(get(&r, "value").as_string().unwrap(), generate_normalized_path(&[1.0, 3.0], 10.0, 10.0, None));
}

#[wasm_bindgen_test]
fn options_object_sets_range() {
    let opts = js_sys::Object::new();
    Reflect::set(&opts, &"width".into(), &JsValue::from_f64(10.0)).unwrap();
    Reflect::set(&opts, &"height".into(), &JsValue::from_f64(10.0)).unwrap();
    let range = js_sys::Object::new();
    Reflect::set(&range, &"min".into(), &JsValue::from_f64(0.0)).unwrap();
    Reflect::set(&range, &"max".into(), &JsValue::from_f64(100.0)).unwrap();
    Reflect::set(&opts, &"range".into(), &range).unwrap();
    let r = generate_path_with(&[0.0, 1.0], opts.into());
    assert!(is_ok(&r));
    assert_eq!(get(&r, "value").as_string().unwrap(), "M0 10 C5 10 5 0 10 0");

    let r2 = generate_path_from_json(&[0.0, 1.0], r#"{"width":10,"height":10,"closed":true,"range":{"min":0,"max":100}}"#);
    assert_eq!(get(&r2, "value").as_string().unwrap(), "M0 10 C5 10 5 0 10 0 L10 10 L0 10 Z");

    assert!(is_ok(&generate_path_with(&[0.0, 1.0], JsValue::UNDEFINED)));
}

#[wasm_bindgen_test]
fn commands_and_json_documents() {
    let cmds = path_commands(&[0.0, 1.0], 10.0, 10.0, Some(true));
    let arr: Array = cmds.into();
    assert_eq!(arr.length(), 5);
    assert_eq!(get(&arr.get(0), "cmd").as_string().unwrap(), "MoveTo");
    assert_eq!(get(&arr.get(4), "cmd").as_string().unwrap(), "Close");

    let doc: serde_json::Value = serde_json::from_str(&path_json(&[0.0, 1.0], 10.0, 10.0, None)).unwrap();
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["segments"], 1);
}

#[wasm_bindgen_test]
fn normalize_and_simplify_arrays() {
    let n = normalize_array(&[10.0, 20.0, 30.0], 0.0, 1.0).to_vec();
    assert_eq!(n, vec![0.0, 0.5, 1.0]);
    let s: Float64Array = simplify_data(&[0.0, 3.0, 8.0, 2.0, 0.0], 1.0);
    assert_eq!(s.to_vec(), vec![0.0, 8.0, 0.0]);
    let r = simplify_data_res(&[1.0, 2.0, 3.0], 10.0);
    assert!(is_ok(&r));
    assert_eq!(Float64Array::from(get(&r, "value")).to_vec(), vec![1.0, 3.0]);
}

#[wasm_bindgen_test]
fn batches_reach_callback_in_order() {
    let seen = Array::new();
    let cb: Function = Function::new_with_args("seen, b", "seen.push(b.length)").bind1(&JsValue::NULL, &seen).unchecked_into();
    let arr: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    assert_eq!(process_array_in_batches(&arr, 3.0, &cb), 4);
    let sizes: Vec<f64> = seen.iter().map(|v| v.as_f64().unwrap()).collect();
    assert_eq!(sizes, vec![3.0, 3.0, 3.0, 1.0]);
    assert_eq!(process_array_in_batches(&arr, 0.0, &cb), 0);
    assert_eq!(process_array_in_batches(&arr, f64::NAN, &cb), 0);
    assert_eq!(seen.length(), 4);
}

#[wasm_bindgen_test]
fn huge_batch_size_is_one_call() {
    let noop = Function::new_no_args("");
    let arr = [1.0, 2.0, 3.0];
    assert_eq!(process_array_in_batches(&arr, 2f64.powi(31), &noop), 1);
    assert_eq!(process_array_in_batches(&arr, f64::INFINITY, &noop), 1);
    // fractional sizes truncate
    assert_eq!(process_array_in_batches(&arr, 2.7, &noop), 2);
    let r = process_array_in_batches_res(&arr, 2f64.powi(40), &noop);
    assert!(is_ok(&r));
    assert_eq!(get(&r, "value").as_f64(), Some(1.0));
}
