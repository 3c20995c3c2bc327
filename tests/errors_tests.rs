use js_sys::{Function, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use wavepath_wasm::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

#[wasm_bindgen_test]
fn path_inputs_return_typed_errors() {
    assert!(is_err(&generate_normalized_path_res(&[1.0, f64::NAN], 10.0, 10.0, None), "non_finite"));
    assert!(is_err(&generate_normalized_path_res(&[1.0, 2.0], 0.0, 10.0, None), "out_of_range"));
    assert!(is_err(&generate_normalized_path_res(&[1.0, 2.0], 10.0, f64::INFINITY, None), "non_finite"));
}

fn error_param(v: &JsValue) -> Option<String> {
    let err = Reflect::get(v, &JsValue::from_str("error")).ok()?;
    let data = Reflect::get(&err, &JsValue::from_str("data")).ok()?;
    Reflect::get(&data, &JsValue::from_str("param")).ok()?.as_string()
}

#[wasm_bindgen_test]
fn non_finite_errors_name_the_parameter() {
    let r = generate_normalized_path_res(&[1.0, 2.0], f64::NAN, 10.0, None);
    assert!(is_err(&r, "non_finite"));
    assert_eq!(error_param(&r).as_deref(), Some("svgWidth"));
    let r = generate_normalized_path_res(&[1.0, 2.0], 10.0, f64::NEG_INFINITY, None);
    assert_eq!(error_param(&r).as_deref(), Some("svgHeight"));
    let r = simplify_data_res(&[1.0, 2.0, 3.0], f64::NAN);
    assert!(is_err(&r, "non_finite"));
    assert_eq!(error_param(&r).as_deref(), Some("epsilon"));
}

#[wasm_bindgen_test]
fn bad_options_are_reported() {
    assert!(is_err(&generate_path_with(&[1.0, 2.0], JsValue::from_str("wide")), "invalid_options"));
    assert!(is_err(&generate_path_from_json(&[1.0, 2.0], "{oops"), "json_parse"));
    assert!(is_err(&generate_path_from_json(&[1.0, 2.0], r#"{"height": -3}"#), "out_of_range"));
}

#[wasm_bindgen_test]
fn simplify_epsilon_errors() {
    assert!(is_err(&simplify_data_res(&[1.0, 2.0, 3.0], -1.0), "out_of_range"));
    assert!(is_err(&simplify_data_res(&[1.0, f64::NAN, 3.0], 1.0), "non_finite"));
}

#[wasm_bindgen_test]
fn batch_errors() {
    let noop = Function::new_no_args("");
    let r = process_array_in_batches_res(&[1.0, 2.0], 0.0, &noop);
    assert!(is_err(&r, "out_of_range"));
    let err = Reflect::get(&r, &JsValue::from_str("error")).unwrap();
    let data = Reflect::get(&err, &JsValue::from_str("data")).unwrap();
    assert_eq!(Reflect::get(&data, &JsValue::from_str("got")).unwrap().as_f64(), Some(0.0));

    let thrower = Function::new_with_args("b", "if (b[0] > 2) throw new Error('boom')");
    let r2 = process_array_in_batches_res(&[1.0, 2.0, 3.0, 4.0], 2.0, &thrower);
    assert!(is_err(&r2, "callback_failed"));
    let data2 = Reflect::get(&Reflect::get(&r2, &JsValue::from_str("error")).unwrap(), &JsValue::from_str("data")).unwrap();
    assert_eq!(Reflect::get(&data2, &JsValue::from_str("batch")).unwrap().as_f64(), Some(1.0));

    // lenient variant stops at the throw and reports completed calls
    assert_eq!(process_array_in_batches(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2.0, &thrower), 1);
    assert!(is_err(&process_array_in_batches_res(&[1.0], f64::NAN, &noop), "non_finite"));
}
